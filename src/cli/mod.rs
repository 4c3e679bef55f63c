//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `cssmin`: 压缩 CSS 文件
//! - `jsmin`: 压缩 JavaScript 文件
//! - `jslint`: 用外部 lint 工具检查 JavaScript 文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: fileset, minify, lint

pub mod fileset;
pub mod lint;
pub mod minify;

use clap::{Parser, Subcommand};

/// assetpipe - 静态资源构建任务
#[derive(Parser)]
#[command(name = "assetpipe")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Minify CSS/JavaScript and lint JavaScript as build-pipeline tasks", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Minify CSS files (line-wrapped output)
    Cssmin(minify::MinifyArgs),

    /// Minify JavaScript files
    Jsmin(minify::MinifyArgs),

    /// Check JavaScript files with an external JSLint script
    Jslint(lint::LintArgs),
}
