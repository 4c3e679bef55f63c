//! # 诊断记录数据模型
//!
//! lint 子进程错误流中的一条发现，以及按文件、按整次运行的汇总。
//!
//! ## 依赖关系
//! - 被 `lint/` 使用
//! - 被 `commands/lint.rs` 使用（汇总表与 CSV 报告）

use serde::Serialize;
use std::path::PathBuf;

/// 一条诊断：摘要行与可选的详情行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub primary: String,
    pub detail: Option<String>,
}

impl DiagnosticRecord {
    /// 日志文本：每行加缩进，行间以换行连接
    pub fn to_log_message(&self, indent: &str) -> String {
        match &self.detail {
            Some(detail) => format!("{indent}{}\n{indent}{}", self.primary, detail),
            None => format!("{indent}{}", self.primary),
        }
    }
}

/// 单个文件的检查结果
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<DiagnosticRecord>,
}

impl FileReport {
    pub fn has_failures(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// 一次运行的汇总结果
#[derive(Debug, Default)]
pub struct RunResult {
    pub any_failures: bool,
    pub reports: Vec<FileReport>,
}

impl RunResult {
    /// 合并单个文件结果
    pub fn merge(&mut self, report: FileReport) {
        self.any_failures |= report.has_failures();
        self.reports.push(report);
    }

    /// 存在诊断的文件数
    pub fn failed_files(&self) -> usize {
        self.reports.iter().filter(|r| r.has_failures()).count()
    }

    /// 诊断总数
    pub fn total_diagnostics(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }

    /// 展开为 CSV 行
    pub fn report_rows(&self) -> Vec<ReportRow<'_>> {
        self.reports
            .iter()
            .flat_map(|report| {
                report.diagnostics.iter().map(move |d| ReportRow {
                    file: report.path.display().to_string(),
                    summary: &d.primary,
                    detail: d.detail.as_deref().unwrap_or_default(),
                })
            })
            .collect()
    }
}

/// CSV 报告中的一行
#[derive(Debug, Serialize)]
pub struct ReportRow<'a> {
    pub file: String,
    pub summary: &'a str,
    pub detail: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(primary: &str, detail: Option<&str>) -> DiagnosticRecord {
        DiagnosticRecord {
            primary: primary.to_string(),
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_log_message_indents_each_line() {
        let r = record("Error: Unexpected token", Some("  line 4, col 2: foo(}"));
        assert_eq!(
            r.to_log_message("    "),
            "    Error: Unexpected token\n      line 4, col 2: foo(}"
        );
        assert_eq!(record("Lonely", None).to_log_message("    "), "    Lonely");
    }

    #[test]
    fn test_run_result_aggregates_failures() {
        let mut result = RunResult::default();
        result.merge(FileReport {
            path: PathBuf::from("ok.js"),
            diagnostics: vec![],
        });
        assert!(!result.any_failures);

        result.merge(FileReport {
            path: PathBuf::from("bad.js"),
            diagnostics: vec![record("a", Some("b")), record("c", None)],
        });
        result.merge(FileReport {
            path: PathBuf::from("ok2.js"),
            diagnostics: vec![],
        });
        assert!(result.any_failures);
        assert_eq!(result.failed_files(), 1);
        assert_eq!(result.total_diagnostics(), 2);

        let rows = result.report_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].file, "bad.js");
        assert_eq!(rows[1].detail, "");
    }
}
