//! # 美化输出工具
//!
//! 提供统一的终端输出样式，以及组件使用的日志接收端 `LogSink`。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - `LogSink` 被 `batch/`, `lint/` 使用
//! - 使用 `colored`, `indicatif` crate

use colored::Colorize;
use indicatif::ProgressBar;

/// 组件日志接收端（info / error 两个级别）
pub trait LogSink {
    fn info(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// 终端日志；存在进度条时先挂起进度条再输出
#[derive(Default)]
pub struct Console<'a> {
    progress: Option<&'a ProgressBar>,
}

impl<'a> Console<'a> {
    pub fn with_progress(progress: &'a ProgressBar) -> Self {
        Self {
            progress: Some(progress),
        }
    }

    fn emit(&self, f: impl FnOnce()) {
        match self.progress {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl LogSink for Console<'_> {
    fn info(&self, msg: &str) {
        self.emit(|| print_info(msg));
    }

    fn error(&self, msg: &str) {
        self.emit(|| print_error(msg));
    }
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印失败汇总
pub fn print_failed(msg: &str) {
    println!("{} {}", "[FAIL]".red().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
