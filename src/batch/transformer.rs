//! # 批量转换驱动
//!
//! 按给定顺序为每个输入文件推导输出路径、按需创建输出目录，
//! 然后调用可插拔的转换函数。任何错误都会中止剩余文件（fail-fast）。
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs` 调用
//! - 使用 `models/task.rs`
//! - 使用 `utils/output.rs` 的 `LogSink`

use crate::compress::CompressError;
use crate::error::{AssetError, Result};
use crate::models::{DestinationPolicy, FileTask, MinifyStats};
use crate::utils::output::LogSink;

use std::fs;
use std::path::{Path, PathBuf};

/// 批量转换器
pub struct BatchTransformer {
    policy: DestinationPolicy,
}

impl BatchTransformer {
    pub fn new(policy: DestinationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DestinationPolicy {
        &self.policy
    }

    /// 顺序处理所有输入，返回成功处理的文件数
    pub fn run<F>(&self, inputs: &[PathBuf], mut transform: F) -> Result<usize>
    where
        F: FnMut(&FileTask) -> Result<()>,
    {
        for input in inputs {
            let task = self.policy.task_for(input);
            ensure_dir(&self.policy.output_dir(input))?;
            transform(&task)?;
        }
        Ok(inputs.len())
    }
}

/// 创建目录及所有缺失的上级目录；已存在时什么也不做
fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| AssetError::DirectoryCreateError {
        path: dir.display().to_string(),
        source: e,
    })
}

/// 读取输入、压缩、写出结果（覆盖已存在的输出文件）
///
/// 输入不是合法 UTF-8 时不报错，无效字节被替换。
pub fn minify_file<C, L>(task: &FileTask, kind: &str, compress: C, log: &L) -> Result<MinifyStats>
where
    C: Fn(&str) -> std::result::Result<String, CompressError>,
    L: LogSink,
{
    log.info(&format!(
        "Minifying {} {} -> {}",
        kind,
        task.input.display(),
        task.output.display()
    ));

    let raw = fs::read(&task.input).map_err(|e| AssetError::FileReadError {
        path: task.input.display().to_string(),
        source: e,
    })?;
    // 非 UTF-8 字节按替换字符解码
    let input = String::from_utf8_lossy(&raw);

    let output = compress(&input).map_err(|e| AssetError::CompressError {
        path: task.input.display().to_string(),
        reason: e.to_string(),
    })?;

    fs::write(&task.output, &output).map_err(|e| AssetError::FileWriteError {
        path: task.output.display().to_string(),
        source: e,
    })?;

    Ok(MinifyStats {
        task: task.clone(),
        bytes_in: raw.len(),
        bytes_out: output.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress::{js, CssCompressor};
    use crate::utils::output::testing::{Level, MemoryLog};
    use tempfile::tempdir;

    #[test]
    fn test_run_visits_inputs_in_order() {
        let dir = tempdir().unwrap();
        let inputs: Vec<PathBuf> = ["b.js", "a.js", "c.js"]
            .iter()
            .map(|n| dir.path().join(n))
            .collect();
        let out = dir.path().join("out");
        let batch = BatchTransformer::new(DestinationPolicy::new(
            Some(".min".into()),
            Some(out.clone()),
        ));

        let mut seen = Vec::new();
        let count = batch
            .run(&inputs, |task| {
                seen.push(task.output.clone());
                Ok(())
            })
            .unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            seen,
            vec![out.join("b.min.js"), out.join("a.min.js"), out.join("c.min.js")]
        );
        assert!(out.is_dir());
    }

    #[test]
    fn test_directory_creation_is_idempotent() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("app.js");
        fs::write(&src, "var a = 1;").unwrap();
        let target = dir.path().join("deep/nested/dist");
        let batch = BatchTransformer::new(DestinationPolicy::new(None, Some(target.clone())));
        let log = MemoryLog::default();

        for _ in 0..2 {
            batch
                .run(&[src.clone()], |task| {
                    minify_file(task, "JavaScript", js::compress, &log).map(|_| ())
                })
                .unwrap();
        }
        assert_eq!(
            fs::read_to_string(target.join("app.js")).unwrap(),
            "var a=1;"
        );
    }

    #[test]
    fn test_css_with_suffix_and_target_dir() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("style.css");
        let original = "body {\n  color : red ;\n}\n";
        fs::write(&src, original).unwrap();
        let dist = dir.path().join("dist");
        let batch = BatchTransformer::new(DestinationPolicy::new(
            Some("-min".into()),
            Some(dist.clone()),
        ));
        let css = CssCompressor::new(Some(80));
        let log = MemoryLog::default();

        let mut stats = Vec::new();
        batch
            .run(&[src.clone()], |task| {
                stats.push(minify_file(task, "CSS", |s| Ok(css.compress(s)), &log)?);
                Ok(())
            })
            .unwrap();

        let out = dist.join("style-min.css");
        assert_eq!(fs::read_to_string(&out).unwrap(), "body{color:red}");
        assert_eq!(fs::read_to_string(&src).unwrap(), original);
        assert_eq!(stats[0].task.output, out);
        assert_eq!(stats[0].bytes_out, "body{color:red}".len());
        assert_eq!(
            log.messages(Level::Info),
            vec![format!("Minifying CSS {} -> {}", src.display(), out.display())]
        );
    }

    #[test]
    fn test_unreadable_file_aborts_batch() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("one.js");
        let missing = dir.path().join("two.js");
        let third = dir.path().join("three.js");
        fs::write(&first, "var one = 1;").unwrap();
        fs::write(&third, "var three = 3;").unwrap();
        let batch = BatchTransformer::new(DestinationPolicy::new(Some("-min".into()), None));
        let log = MemoryLog::default();

        let err = batch
            .run(&[first, missing.clone(), third], |task| {
                minify_file(task, "JavaScript", js::compress, &log).map(|_| ())
            })
            .unwrap_err();

        assert!(matches!(err, AssetError::FileReadError { path, .. } if path == missing.display().to_string()));
        assert!(dir.path().join("one-min.js").exists());
        assert!(!dir.path().join("three-min.js").exists());
        assert_eq!(log.messages(Level::Info).len(), 2);
    }

    #[test]
    fn test_compress_error_carries_path() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("broken.js");
        fs::write(&src, "var s = 'open").unwrap();
        let batch = BatchTransformer::new(DestinationPolicy::new(Some("-min".into()), None));
        let log = MemoryLog::default();

        let err = batch
            .run(&[src], |task| {
                minify_file(task, "JavaScript", js::compress, &log).map(|_| ())
            })
            .unwrap_err();
        match err {
            AssetError::CompressError { path, reason } => {
                assert!(path.ends_with("broken.js"));
                assert_eq!(reason, "Unterminated string literal");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_utf8_source_is_decoded_lossily() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("latin1.js");
        fs::write(&src, b"var s  =  'caf\xe9' ;").unwrap();
        let batch = BatchTransformer::new(DestinationPolicy::new(Some("-min".into()), None));
        let log = MemoryLog::default();

        let mut stats = Vec::new();
        batch
            .run(&[src], |task| {
                stats.push(minify_file(task, "JavaScript", js::compress, &log)?);
                Ok(())
            })
            .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("latin1-min.js")).unwrap(),
            "var s='caf\u{fffd}';"
        );
        assert_eq!(stats[0].bytes_in, 18);
    }

    #[test]
    fn test_in_place_policy_overwrites_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("inline.js");
        fs::write(&src, "var  x  =  1 ;").unwrap();
        let batch = BatchTransformer::new(DestinationPolicy::default());
        assert!(batch.policy().is_in_place());
        let log = MemoryLog::default();

        batch
            .run(&[src.clone()], |task| {
                minify_file(task, "JavaScript", js::compress, &log).map(|_| ())
            })
            .unwrap();
        assert_eq!(fs::read_to_string(&src).unwrap(), "var x=1;");
    }
}
