//! # JavaScript lint 模块
//!
//! 通过外部解释器运行 lint 脚本，每个文件一个子进程，
//! 把错误流解析为诊断记录并汇总通过/失败结果。
//!
//! ## 依赖关系
//! - 被 `commands/lint.rs` 调用
//! - 使用 `models/diagnostic.rs`, `utils/output.rs`
//! - 子模块: directive, diagnostic, encoding, supervisor, toolchain

pub mod diagnostic;
pub mod directive;
pub mod encoding;
pub mod supervisor;
pub mod toolchain;

pub use encoding::TextEncoding;
pub use supervisor::{LintSettings, Supervisor};
pub use toolchain::Toolchain;
