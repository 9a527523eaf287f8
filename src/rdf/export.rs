//! # RDF 数据导出
//!
//! 导出 RDF 曲线到 CSV 和 DAT 格式。
//!
//! ## 支持格式
//! - CSV: `r, g, shell_volume, count` 完整数据
//! - DAT: 注释头 + `r<TAB>g` 两列（常用绘图格式）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `rdf/histogram.rs` 的 RdfCurve 结构
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::error::{RdfError, Result};
use crate::rdf::RdfCurve;

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Serialize)]
struct CurveRow {
    r: f64,
    g: f64,
    shell_volume: f64,
    count: usize,
}

/// 导出为 CSV 文件
pub fn to_csv(curve: &RdfCurve, output_path: &Path) -> Result<()> {
    let file = create_file(output_path)?;
    write_csv(curve, file)
}

/// 写入 CSV
pub fn write_csv<W: Write>(curve: &RdfCurve, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for i in 0..curve.len() {
        wtr.serialize(CurveRow {
            r: curve.radius[i],
            g: curve.g[i],
            shell_volume: curve.shell_volume[i],
            count: curve.counts[i],
        })?;
    }

    wtr.flush().map_err(|e| RdfError::FileWriteError {
        path: "<csv>".to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出为 DAT 文件
pub fn to_dat(curve: &RdfCurve, title: &str, output_path: &Path) -> Result<()> {
    let file = create_file(output_path)?;
    write_dat(curve, title, BufWriter::new(file)).map_err(|e| RdfError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 写入 DAT（两列，制表符分隔）
pub fn write_dat<W: Write>(curve: &RdfCurve, title: &str, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "# RDF: {}", title)?;
    match curve.peak {
        Some((r0, g0)) => {
            writeln!(writer, "# Normalized to first peak: r0 = {:.6}, g0 = {:.6}", r0, g0)?;
            writeln!(writer, "# Columns: r/r0, g(r)/g0")?;
        }
        None => writeln!(writer, "# Columns: r (Angstrom), g(r)")?,
    }
    if curve.discarded > 0 {
        writeln!(writer, "# Distances beyond last bin: {}", curve.discarded)?;
    }

    for (r, g) in curve.radius.iter().zip(curve.g.iter()) {
        writeln!(writer, "{:.6}\t{:.6}", r, g)?;
    }

    writer.flush()
}

fn create_file(output_path: &Path) -> Result<File> {
    File::create(output_path).map_err(|e| RdfError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}
