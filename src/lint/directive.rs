//! # JSLint 配置指令
//!
//! 把用户给出的配置规范化为 `/*jslint ... */` 形式，作为子进程输入的第一行。
//! 规范化是幂等的。
//!
//! ## 依赖关系
//! - 被 `lint/supervisor.rs` 使用
//! - 使用 `config.rs` 中的常量

use crate::config::{DIRECTIVE_CLOSER, DIRECTIVE_OPENER};

/// 规范化配置字符串
///
/// - 未提供时返回 `default`
/// - 已以 `/*jslint ` 开头时原样返回
/// - 否则包装为 `/*jslint <config> */`
pub fn normalize(config: Option<&str>, default: &str) -> String {
    match config {
        None => default.to_string(),
        Some(raw) if raw.starts_with(DIRECTIVE_OPENER) => raw.to_string(),
        Some(raw) => format!("{DIRECTIVE_OPENER}{raw}{DIRECTIVE_CLOSER}"),
    }
}
