//! # 数据模型模块
//!
//! 定义一次批处理调用中的短生命周期数据：文件任务、输出策略、
//! 诊断记录与运行结果。均不逃逸到进程级状态。
//!
//! ## 依赖关系
//! - 被 `batch/`, `lint/` 和 `commands/` 使用
//! - 子模块: task, diagnostic

pub mod diagnostic;
pub mod task;

pub use diagnostic::{DiagnosticRecord, FileReport, RunResult};
pub use task::{DestinationPolicy, FileTask, MinifyStats};
