//! # jslint 命令实现
//!
//! 对每个 JavaScript 文件运行一次外部 lint 工具，汇总发现。
//!
//! ## 功能
//! - 规范化配置指令（未提供时使用内置规则）
//! - 定位解释器与 lint 脚本
//! - 逐个文件检查，有发现的文件不会中断循环
//! - 打印每个文件的结果表，可选写出 CSV 报告
//! - `--fail-on-error` 时在全部检查后以错误退出
//!
//! ## 依赖关系
//! - 使用 `cli/lint.rs` 定义的参数
//! - 使用 `lint/`, `models/diagnostic.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::resolve_files;
use crate::cli::lint::LintArgs;
use crate::config::DEFAULT_JSLINT_CONFIG;
use crate::error::{AssetError, Result};
use crate::lint::{directive, LintSettings, Supervisor, Toolchain};
use crate::models::RunResult;
use crate::utils::output::{self, Console};
use crate::utils::progress;

use std::path::Path;
use tabled::{Table, Tabled};

/// 结果表的一行
#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Findings")]
    findings: usize,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// 执行 jslint 命令
pub fn execute(args: LintArgs) -> Result<()> {
    output::print_header("Linting JavaScript Files");

    let directive = directive::normalize(args.config.as_deref(), DEFAULT_JSLINT_CONFIG);
    let files = resolve_files(&args.files, "*.js")?;
    let toolchain = Toolchain::resolve(args.interpreter, args.interpreter_args, args.script)?;
    let settings = LintSettings::new(directive, args.encoding);

    output::print_info(&format!("Lint command: {}", toolchain.display()));
    output::print_info(&format!("Input encoding: {}", settings.encoding));

    if files.is_empty() {
        output::print_warning("No matching files found");
        return Ok(());
    }

    let pb = progress::create_progress_bar(files.len() as u64, "Linting");
    let log = Console::with_progress(&pb);
    let supervisor = Supervisor::new(&toolchain, &settings, &log);
    let result = supervisor.check_all_with(&files, |_| pb.inc(1));
    pb.finish_and_clear();
    let result = result?;

    print_results(&result);

    if let Some(report) = &args.report {
        write_report(&result, report)?;
        output::print_info(&format!("Report written to {}", report.display()));
    }

    if !result.any_failures {
        output::print_done(&format!("{} file(s) passed", result.reports.len()));
        return Ok(());
    }

    let failed = result.failed_files();
    output::print_failed(&format!(
        "{} finding(s) in {} of {} file(s)",
        result.total_diagnostics(),
        failed,
        result.reports.len()
    ));
    if args.fail_on_error {
        return Err(AssetError::LintFailed { files: failed });
    }
    Ok(())
}

fn print_results(result: &RunResult) {
    let rows: Vec<ResultRow> = result
        .reports
        .iter()
        .map(|r| ResultRow {
            file: r.path.display().to_string(),
            findings: r.diagnostics.len(),
            status: if r.has_failures() { "FAIL" } else { "OK" },
        })
        .collect();
    println!("{}", Table::new(&rows));
}

/// 写出 CSV 报告（每条诊断一行）
fn write_report(result: &RunResult, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(AssetError::CsvError)?;
    for row in result.report_rows() {
        wtr.serialize(row).map_err(AssetError::CsvError)?;
    }
    wtr.flush().map_err(|e| AssetError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
