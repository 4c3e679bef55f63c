//! # 文件集参数
//!
//! 所有子命令共享的输入参数：路径、包含/排除模式、是否递归。
//!
//! ## 依赖关系
//! - 被 `cli/minify.rs`, `cli/lint.rs` 展开（flatten）
//! - 由 `commands/` 转换为 `batch::FileSet`

use clap::Args;
use std::path::PathBuf;

/// 文件集参数
#[derive(Args, Debug)]
pub struct FilesetArgs {
    /// Input files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Comma-separated glob patterns for files inside input directories
    #[arg(short, long)]
    pub include: Option<String>,

    /// Comma-separated glob patterns to exclude
    #[arg(short, long, default_value = "")]
    pub exclude: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
}
