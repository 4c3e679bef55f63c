//! # 文件集解析
//!
//! 把命令行给出的输入路径解析为有序的文件列表。
//!
//! ## 功能
//! - 输入为文件时原样保留（不应用 include/exclude）
//! - 输入为目录时按 include/exclude glob 模式筛选
//! - 可选递归目录搜索
//! - 同一目录内按路径排序，不同输入之间保持给定顺序
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs`, `commands/lint.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配模式

use crate::error::{AssetError, Result};

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件集
pub struct FileSet {
    /// 输入路径
    inputs: Vec<PathBuf>,
    /// 包含模式
    includes: Vec<Pattern>,
    /// 排除模式
    excludes: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileSet {
    /// 创建新的文件集
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            includes: Vec::new(),
            excludes: Vec::new(),
            recursive: false,
        }
    }

    /// 设置包含模式（逗号分隔的多模式）
    pub fn with_includes(mut self, patterns: &str) -> Result<Self> {
        self.includes = parse_patterns(patterns)?;
        Ok(self)
    }

    /// 设置排除模式（逗号分隔的多模式）
    pub fn with_excludes(mut self, patterns: &str) -> Result<Self> {
        self.excludes = parse_patterns(patterns)?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in &self.inputs {
            if input.is_file() {
                files.push(input.clone());
            } else if input.is_dir() {
                files.extend(self.walk(input));
            } else {
                return Err(AssetError::FileNotFound {
                    path: input.display().to_string(),
                });
            }
        }
        Ok(files)
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(root)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.selects(root, e.path()))
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    /// 文件名或相对路径匹配任一包含模式，且不匹配任何排除模式
    fn selects(&self, root: &Path, path: &Path) -> bool {
        let rel = path.strip_prefix(root).unwrap_or(path);
        let name = match path.file_name() {
            Some(name) => Path::new(name),
            None => return false,
        };
        let matches_any = |patterns: &[Pattern]| {
            patterns
                .iter()
                .any(|p| p.matches_path(name) || p.matches_path(rel))
        };

        let included = self.includes.is_empty() || matches_any(&self.includes);
        included && !matches_any(&self.excludes)
    }
}

fn parse_patterns(patterns: &str) -> Result<Vec<Pattern>> {
    patterns
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Pattern::new(s).map_err(|e| AssetError::InvalidPattern {
                pattern: s.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_directory_filtered_and_sorted() {
        let dir = tempdir().unwrap();
        for name in ["b.js", "a.js", "c.css", "a.min.js", "lib/d.js"] {
            touch(&dir.path().join(name));
        }

        let files = FileSet::new(vec![dir.path().to_path_buf()])
            .with_includes("*.js")
            .unwrap()
            .with_excludes("*.min.js")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(files, vec![dir.path().join("a.js"), dir.path().join("b.js")]);
    }

    #[test]
    fn test_recursive_walk() {
        let dir = tempdir().unwrap();
        for name in ["a.css", "nested/deeper/b.css", "nested/c.txt"] {
            touch(&dir.path().join(name));
        }

        let files = FileSet::new(vec![dir.path().to_path_buf()])
            .with_includes("*.css")
            .unwrap()
            .recursive(true)
            .collect()
            .unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.css"), dir.path().join("nested/deeper/b.css")]
        );
    }

    #[test]
    fn test_relative_path_patterns() {
        let dir = tempdir().unwrap();
        for name in ["vendor/jquery.js", "app/main.js"] {
            touch(&dir.path().join(name));
        }

        let files = FileSet::new(vec![dir.path().to_path_buf()])
            .with_includes("*.js")
            .unwrap()
            .with_excludes("vendor/*")
            .unwrap()
            .recursive(true)
            .collect()
            .unwrap();
        assert_eq!(files, vec![dir.path().join("app/main.js")]);
    }

    #[test]
    fn test_explicit_files_keep_order() {
        let dir = tempdir().unwrap();
        let z = dir.path().join("z.js");
        let a = dir.path().join("a.txt");
        touch(&z);
        touch(&a);

        let files = FileSet::new(vec![z.clone(), a.clone()])
            .with_includes("*.js")
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(files, vec![z, a]);
    }

    #[test]
    fn test_missing_input_is_error() {
        let dir = tempdir().unwrap();
        let err = FileSet::new(vec![dir.path().join("nope")])
            .collect()
            .unwrap_err();
        assert!(matches!(err, AssetError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = FileSet::new(vec![]).with_includes("[").err().unwrap();
        assert!(matches!(err, AssetError::InvalidPattern { .. }));
    }
}
