//! # 批量处理模块
//!
//! 提供统一的文件批量处理能力。
//!
//! ## 功能
//! - 解析输入文件集（文件/目录 + glob 模式）
//! - 推导输出路径并顺序调用可插拔的转换函数
//! - 首个错误即中止整批
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `walkdir`, `glob` 收集文件

pub mod collector;
pub mod transformer;

pub use collector::FileSet;
pub use transformer::{minify_file, BatchTransformer};
