//! # cssmin / jsmin 子命令 CLI 定义
//!
//! 压缩 CSS 或 JavaScript 文件，输出到目标目录并可追加文件名后缀。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/minify.rs`

use super::fileset::FilesetArgs;
use clap::Args;
use std::path::PathBuf;

/// cssmin / jsmin 子命令参数
#[derive(Args, Debug)]
pub struct MinifyArgs {
    #[command(flatten)]
    pub files: FilesetArgs,

    /// Suffix appended to the output file name before the extension (e.g. "-min")
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Output directory (default: next to each input file)
    #[arg(short = 'd', long = "todir")]
    pub todir: Option<PathBuf>,
}
