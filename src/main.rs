//! # assetpipe - 静态资源构建任务
//!
//! 把构建流水线中的 CSS/JavaScript 压缩与 JavaScript lint 任务
//! 统一成单一可执行文件。
//!
//! ## 子命令
//! - `cssmin` - CSS 压缩
//! - `jsmin`  - JavaScript 压缩
//! - `jslint` - 通过外部 JSLint 脚本检查 JavaScript
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件集与批量转换)
//!   │     ├── compress/  (CSS/JS 压缩器)
//!   │     ├── lint/      (lint 子进程监督)
//!   │     └── models/    (数据模型)
//!   ├── config.rs   (常量与默认配置)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod compress;
mod config;
mod error;
mod lint;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
