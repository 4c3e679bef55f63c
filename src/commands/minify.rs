//! # cssmin / jsmin 命令实现
//!
//! 解析文件集，按目标策略推导输出路径，逐个压缩并写出结果。
//!
//! ## 功能
//! - CSS: 正则压缩，输出在固定列宽后换行
//! - JavaScript: JSMin 压缩
//! - 任一文件失败立即中止（已写出的文件保留）
//! - 成功后打印大小统计表
//!
//! ## 依赖关系
//! - 使用 `cli/minify.rs` 定义的参数
//! - 使用 `batch/`, `compress/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::resolve_files;
use crate::batch::{minify_file, BatchTransformer};
use crate::cli::minify::MinifyArgs;
use crate::compress::{js, CompressError, CssCompressor};
use crate::config::CSS_LINE_BREAK_COLUMN;
use crate::error::Result;
use crate::models::{DestinationPolicy, MinifyStats};
use crate::utils::output::{self, Console};
use crate::utils::progress;

use tabled::{Table, Tabled};

/// 统计表的一行
#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Output")]
    output: String,
    #[tabled(rename = "Bytes in")]
    bytes_in: usize,
    #[tabled(rename = "Bytes out")]
    bytes_out: usize,
    #[tabled(rename = "Saved")]
    saved: String,
}

impl From<&MinifyStats> for StatsRow {
    fn from(stats: &MinifyStats) -> Self {
        Self {
            input: stats.task.input.display().to_string(),
            output: stats.task.output.display().to_string(),
            bytes_in: stats.bytes_in,
            bytes_out: stats.bytes_out,
            saved: format!("{:.1}%", stats.saved_percent()),
        }
    }
}

/// 执行 cssmin 命令
pub fn execute_css(args: MinifyArgs) -> Result<()> {
    let css = CssCompressor::new(Some(CSS_LINE_BREAK_COLUMN));
    run_minify(args, "CSS", "*.css", |text| Ok(css.compress(text)))
}

/// 执行 jsmin 命令
pub fn execute_js(args: MinifyArgs) -> Result<()> {
    run_minify(args, "JavaScript", "*.js", js::compress)
}

fn run_minify<C>(args: MinifyArgs, kind: &str, default_include: &str, compress: C) -> Result<()>
where
    C: Fn(&str) -> std::result::Result<String, CompressError>,
{
    output::print_header(&format!("Minifying {} Files", kind));

    let files = resolve_files(&args.files, default_include)?;
    let policy = DestinationPolicy::new(args.suffix, args.todir);
    policy.validate()?;
    let batch = BatchTransformer::new(policy);

    if batch.policy().is_in_place() {
        output::print_warning("No suffix or target directory given, source files will be overwritten");
    }
    if files.is_empty() {
        output::print_warning("No matching files found");
        return Ok(());
    }

    output::print_info(&format!("Found {} {} file(s)", files.len(), kind));

    let pb = progress::create_progress_bar(files.len() as u64, "Minifying");
    let log = Console::with_progress(&pb);

    let mut stats: Vec<MinifyStats> = Vec::with_capacity(files.len());
    let result = batch.run(&files, |task| {
        stats.push(minify_file(task, kind, &compress, &log)?);
        pb.inc(1);
        Ok(())
    });
    pb.finish_and_clear();
    let count = result?;

    let rows: Vec<StatsRow> = stats.iter().map(StatsRow::from).collect();
    println!("{}", Table::new(&rows));

    let bytes_in: usize = stats.iter().map(|s| s.bytes_in).sum();
    let bytes_out: usize = stats.iter().map(|s| s.bytes_out).sum();
    output::print_done(&format!(
        "Minified {} file(s): {} -> {} bytes",
        count, bytes_in, bytes_out
    ));

    Ok(())
}
