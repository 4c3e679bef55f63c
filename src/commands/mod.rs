//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `compress/`, `lint/`, `utils/`
//! - 子模块: minify, lint

pub mod lint;
pub mod minify;

use crate::batch::FileSet;
use crate::cli::fileset::FilesetArgs;
use crate::cli::Commands;
use crate::error::Result;

use std::path::PathBuf;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Cssmin(args) => minify::execute_css(args),
        Commands::Jsmin(args) => minify::execute_js(args),
        Commands::Jslint(args) => lint::execute(args),
    }
}

/// 按文件集参数解析输入文件；未指定 include 时使用 `default_include`
fn resolve_files(args: &FilesetArgs, default_include: &str) -> Result<Vec<PathBuf>> {
    FileSet::new(args.inputs.clone())
        .with_includes(args.include.as_deref().unwrap_or(default_include))?
        .with_excludes(&args.exclude)?
        .recursive(args.recursive)
        .collect()
}
