//! # 统一错误处理模块
//!
//! 定义 assetpipe 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 配置错误: 输入路径缺失、glob 模式无效、外部工具缺失、编码名称无效
//! - I/O 错误: 读取源文件、创建目录、写入输出文件失败（整批中止）
//! - 子进程错误: 无法启动解释器、管道读写失败
//! - 校验失败: lint 发现问题且启用了 fail-on-error
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// assetpipe 统一错误类型
#[derive(Error, Debug)]
pub enum AssetError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported text encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Lint tool not found: {path}")]
    ToolNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 压缩错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to minify {path}\nReason: {reason}")]
    CompressError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to start external command '{command}'")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O with external command '{command}' failed")]
    StreamFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Lint session for '{command}' used out of order: expected {expected}, was {actual}")]
    SessionOrder {
        command: String,
        expected: String,
        actual: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 校验失败
    // ─────────────────────────────────────────────────────────────
    #[error("Lint found errors in {files} file(s)")]
    LintFailed { files: usize },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AssetError>;
