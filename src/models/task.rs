//! # 文件任务数据模型
//!
//! 输出路径由 `DestinationPolicy` 推导，从不由用户直接给出。
//!
//! ## 依赖关系
//! - 被 `batch/transformer.rs` 使用
//! - 被 `commands/minify.rs` 使用

use crate::error::{AssetError, Result};

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// 单个输入文件与其推导出的输出路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// 输出策略：文件名后缀与目标目录
///
/// 两者都缺省时输出路径等于输入路径（原地覆盖）。
#[derive(Debug, Clone, Default)]
pub struct DestinationPolicy {
    pub suffix: Option<String>,
    pub target_dir: Option<PathBuf>,
}

impl DestinationPolicy {
    pub fn new(suffix: Option<String>, target_dir: Option<PathBuf>) -> Self {
        Self { suffix, target_dir }
    }

    /// 后缀只能改变文件名，不能包含路径分隔符
    pub fn validate(&self) -> Result<()> {
        match &self.suffix {
            Some(suffix) if suffix.contains(['/', '\\']) => Err(AssetError::InvalidArgument(
                format!("suffix must not contain path separators: '{}'", suffix),
            )),
            _ => Ok(()),
        }
    }

    /// 是否会覆盖源文件
    pub fn is_in_place(&self) -> bool {
        self.suffix.as_deref().map_or(true, str::is_empty) && self.target_dir.is_none()
    }

    /// 输出目录：目标目录，或输入文件所在目录
    pub fn output_dir(&self, input: &Path) -> PathBuf {
        match &self.target_dir {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        }
    }

    /// 输出文件名：`<stem><suffix><.ext>`
    ///
    /// 扩展名从最后一个 `.` 开始，`.htaccess` 的主干为空。
    pub fn output_file_name(&self, input: &Path) -> OsString {
        let (mut name, ext) = split_extension(input);
        if let Some(suffix) = &self.suffix {
            name.push(suffix);
        }
        if let Some(ext) = ext {
            name.push(".");
            name.push(ext);
        }
        name
    }

    /// 为输入文件推导任务
    pub fn task_for(&self, input: &Path) -> FileTask {
        FileTask {
            input: input.to_path_buf(),
            output: self.output_dir(input).join(self.output_file_name(input)),
        }
    }
}

fn split_extension(input: &Path) -> (OsString, Option<OsString>) {
    match input.file_name().and_then(OsStr::to_str) {
        Some(name) => match name.rsplit_once('.') {
            Some((stem, ext)) => (stem.into(), Some(ext.into())),
            None => (name.into(), None),
        },
        None => (
            input.file_stem().map(OsString::from).unwrap_or_default(),
            input.extension().map(OsString::from),
        ),
    }
}

/// 单个文件的压缩统计
#[derive(Debug, Clone)]
pub struct MinifyStats {
    pub task: FileTask,
    pub bytes_in: usize,
    pub bytes_out: usize,
}

impl MinifyStats {
    /// 节省的百分比
    pub fn saved_percent(&self) -> f64 {
        if self.bytes_in == 0 {
            return 0.0;
        }
        (1.0 - self.bytes_out as f64 / self.bytes_in as f64) * 100.0
    }
}
