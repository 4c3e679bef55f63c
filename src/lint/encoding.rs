//! # 文本编码名称
//!
//! `--encoding` 只做校验和展示：文件内容按原样读取并写给子进程，
//! 不做转码。
//!
//! ## 依赖关系
//! - 被 `cli/lint.rs` 用作参数解析器
//! - 被 `lint/supervisor.rs` 保存在 `LintSettings` 中

use crate::error::AssetError;
use std::fmt;
use std::str::FromStr;

/// 支持的文本编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Ascii,
    Latin1,
    Windows1252,
}

impl FromStr for TextEncoding {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-16" | "utf-16le" | "utf16" | "unicode" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "unicodefffe" => Ok(TextEncoding::Utf16Be),
            "us-ascii" | "ascii" => Ok(TextEncoding::Ascii),
            "iso-8859-1" | "latin1" | "latin-1" => Ok(TextEncoding::Latin1),
            "windows-1252" | "cp1252" => Ok(TextEncoding::Windows1252),
            _ => Err(AssetError::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Utf16Le => write!(f, "utf-16"),
            TextEncoding::Utf16Be => write!(f, "utf-16be"),
            TextEncoding::Ascii => write!(f, "us-ascii"),
            TextEncoding::Latin1 => write!(f, "iso-8859-1"),
            TextEncoding::Windows1252 => write!(f, "windows-1252"),
        }
    }
}
