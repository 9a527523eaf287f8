//! # RDF 结果输出
//!
//! 各子命令共用的输出逻辑：按格式写出曲线、打印配位壳层表格。
//!
//! ## 依赖关系
//! - 被 `commands/trajectory.rs`, `commands/lattice.rs` 使用
//! - 使用 `rdf/plot.rs`, `rdf/export.rs`
//! - 使用 `tabled` 打印表格

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::rdf::plot::{self, PlotStyle};
use crate::rdf::{export, RdfCurve};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 从文件扩展名推断输出格式
pub fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OutputFormat::Svg,
        Some("csv") => OutputFormat::Csv,
        Some("dat") | Some("txt") | Some("xy") => OutputFormat::Dat,
        _ => OutputFormat::Png,
    }
}

/// 在文件名主干后追加后缀，扩展名取自输出格式
///
/// `rdf.png` + `0003` -> `rdf_0003.png`
pub fn with_suffix(path: &Path, suffix: &str, format: OutputFormat) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("rdf");
    path.with_file_name(format!("{}_{}.{}", stem, suffix, format.extension()))
}

/// 按格式写出单条曲线
pub fn write_curve(
    curve: &RdfCurve,
    output_path: &Path,
    format: OutputFormat,
    title: &str,
    style: &PlotStyle,
) -> Result<()> {
    match format {
        OutputFormat::Png | OutputFormat::Svg => plot::generate_rdf_plot(
            curve,
            output_path,
            title,
            style,
            format == OutputFormat::Svg,
        ),
        OutputFormat::Csv => export::to_csv(curve, output_path),
        OutputFormat::Dat => export::to_dat(curve, title, output_path),
    }
}

/// 打印曲线摘要
pub fn print_curve_summary(curve: &RdfCurve) {
    output::print_info(&format!(
        "{} bins, {} pairs counted",
        curve.len(),
        curve.total_counts()
    ));
    if curve.discarded > 0 {
        output::print_warning(&format!(
            "{} distances lie beyond the last bin and were not counted",
            curve.discarded
        ));
    }
    if let Some((r0, g0)) = curve.peak {
        output::print_info(&format!(
            "Normalized to first peak at r0 = {:.4} Å (g0 = {:.4})",
            r0, g0
        ));
    }
}

/// 打印配位壳层表格
pub fn print_shell_table(curve: &RdfCurve, count: usize, title: &str) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ShellRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "r")]
        radius: String,
        #[tabled(rename = "pairs")]
        count: usize,
        #[tabled(rename = "g(r)")]
        g: String,
        #[tabled(rename = "cumulative")]
        cumulative: usize,
    }

    let rows: Vec<ShellRow> = curve
        .coordination_shells(count)
        .into_iter()
        .enumerate()
        .map(|(i, shell)| ShellRow {
            index: i + 1,
            radius: format!("{:.4}", shell.radius),
            count: shell.count,
            g: format!("{:.4}", shell.g),
            cumulative: shell.cumulative,
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(title);
        let table = Table::new(&rows);
        println!("{}", table);
    }
}
