//! # 压缩能力模块
//!
//! CSS 与 JavaScript 的文本压缩。每种压缩都是一个
//! `&str -> Result<String, CompressError>` 能力，由 `batch/` 的通用驱动调用。
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs` 使用
//! - 子模块: css, js

pub mod css;
pub mod js;

pub use css::CssCompressor;

use thiserror::Error;

/// 压缩失败原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompressError {
    #[error("Unterminated comment")]
    UnterminatedComment,

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Unterminated set in regular expression literal")]
    UnterminatedRegexSet,

    #[error("Unterminated regular expression literal")]
    UnterminatedRegex,
}
