//! # jslint 子命令 CLI 定义
//!
//! 用外部解释器运行 JSLint 脚本检查 JavaScript 文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/lint.rs`

use super::fileset::FilesetArgs;
use crate::lint::TextEncoding;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Args};
use std::ffi::OsString;
use std::path::PathBuf;

/// jslint 子命令参数
#[derive(Args, Debug)]
pub struct LintArgs {
    #[command(flatten)]
    pub files: FilesetArgs,

    /// JSLint options, either "/*jslint a: true */" or "a: true, b: false"
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub config: Option<String>,

    /// Text encoding of the input files (validated, content is passed through as-is)
    #[arg(long, default_value = "utf-8")]
    pub encoding: TextEncoding,

    /// Fail when any file has findings
    #[arg(long, env = "ASSETPIPE_FAIL_ON_ERROR", default_value_t = true, action = ArgAction::Set)]
    pub fail_on_error: bool,

    /// Script interpreter (default: cscript.exe in the system directory)
    #[arg(long, env = "ASSETPIPE_INTERPRETER")]
    pub interpreter: Option<PathBuf>,

    /// Argument passed to the interpreter before the script (repeatable, default: //nologo)
    #[arg(long = "interpreter-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub interpreter_args: Vec<OsString>,

    /// Lint script (default: jslint.js next to the executable)
    #[arg(long, env = "ASSETPIPE_LINT_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Write findings to a CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,
}
