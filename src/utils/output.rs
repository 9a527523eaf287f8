//! # 终端输出工具
//!
//! 统一的彩色状态行，以及 RDF 参数和批量结果的摘要打印。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `main.rs` 使用
//! - 使用 `colored` crate

use crate::batch::BatchSummary;
use crate::rdf::RdfParams;

use colored::Colorize;

/// 失败详情最多列出的条数
const MAX_LISTED_FAILURES: usize = 10;

pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 错误的补充提示
pub fn print_hint(msg: &str) {
    eprintln!("{} {}", "[HINT]".cyan(), msg);
}

/// 打印已写出的文件
pub fn print_written(path: &str) {
    println!("{} {} {}", "[OK]".green().bold(), "->".cyan(), path);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印截断半径与分箱设置
pub fn print_rdf_params(params: &RdfParams) {
    print_info(&format!(
        "Cutoff = {:.3} Å, bin size = {:.4} Å ({} bins)",
        params.cutoff,
        params.binsize,
        params.nr_bins()
    ));
}

/// 打印批量任务汇总，并列出失败的任务
pub fn print_batch_summary(summary: &BatchSummary) {
    print_separator();
    print_success(&format!(
        "Batch complete: {} written, {} skipped, {} failed",
        summary.written.len(),
        summary.skipped.len(),
        summary.failures.len()
    ));

    for path in &summary.skipped {
        println!("{} {}", "[SKIP]".dimmed(), path.display());
    }

    if summary.has_failures() {
        print_warning("Failed jobs:");
        for (job, err) in summary.failures.iter().take(MAX_LISTED_FAILURES) {
            print_error(&format!("  {}: {}", job, err));
        }
        if summary.failures.len() > MAX_LISTED_FAILURES {
            print_warning(&format!(
                "  ... and {} more",
                summary.failures.len() - MAX_LISTED_FAILURES
            ));
        }
    }
}
