//! # RDF 图表生成
//!
//! 使用 `plotters` 库绘制 g(r) 曲线。
//!
//! ## 功能
//! - 单条曲线（折线 + 数据点）
//! - 多结构网格对比图（每个结构一个子图）
//! - 可选固定 y 轴上限
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `rdf/histogram.rs` 的 RdfCurve 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{RdfError, Result};
use crate::rdf::RdfCurve;

use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const LINE_COLOR: RGBColor = RGBColor(0, 102, 204);

/// 图表尺寸与样式
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    /// y 轴上限（None 时自动取最大值的 110%）
    pub y_max: Option<f64>,
    /// 是否绘制数据点
    pub markers: bool,
}

/// 生成单条 RDF 曲线图
pub fn generate_rdf_plot(
    curve: &RdfCurve,
    output_path: &Path,
    title: &str,
    style: &PlotStyle,
    use_svg: bool,
) -> Result<()> {
    if curve.is_empty() {
        return Err(RdfError::PlotError("curve has no bins".to_string()));
    }

    if use_svg {
        let root = SVGBackend::new(output_path, (style.width, style.height)).into_drawing_area();
        draw_rdf_chart(&root, curve, title, style)?;
        root.present().map_err(|e| RdfError::PlotError(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
        draw_rdf_chart(&root, curve, title, style)?;
        root.present().map_err(|e| RdfError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 生成多结构网格对比图
pub fn generate_grid_plot(
    curves: &[(String, RdfCurve)],
    output_path: &Path,
    style: &PlotStyle,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (style.width, style.height)).into_drawing_area();
        draw_grid(&root, curves, style)?;
        root.present().map_err(|e| RdfError::PlotError(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
        draw_grid(&root, curves, style)?;
        root.present().map_err(|e| RdfError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 网格行列数（尽量接近方形）
pub fn grid_shape(n: usize) -> (usize, usize) {
    let cols = (n as f64).sqrt().ceil().max(1.0) as usize;
    let rows = n.div_ceil(cols).max(1);
    (rows, cols)
}

fn draw_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    curves: &[(String, RdfCurve)],
    style: &PlotStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| RdfError::PlotError(format!("{:?}", e)))?;

    let (rows, cols) = grid_shape(curves.len());
    let areas = root.split_evenly((rows, cols));

    for ((title, curve), area) in curves.iter().zip(areas.iter()) {
        draw_rdf_chart(area, curve, title, style)?;
    }

    Ok(())
}

/// 绘制 RDF 图表的核心逻辑
fn draw_rdf_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    curve: &RdfCurve,
    title: &str,
    style: &PlotStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    area.fill(&WHITE)
        .map_err(|e| RdfError::PlotError(format!("{:?}", e)))?;

    let x_min = curve.radius.first().copied().unwrap_or(0.0);
    let mut x_max = curve.radius.last().copied().unwrap_or(1.0);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let y_max = style.y_max.unwrap_or_else(|| {
        let peak = curve.g.iter().copied().fold(0.0_f64, f64::max);
        if peak > 0.0 {
            peak * 1.1
        } else {
            1.0
        }
    });

    let (x_desc, y_desc) = if curve.peak.is_some() {
        ("r / r0", "g(r) / g0")
    } else {
        ("Distance r (Å)", "RDF g(r)")
    };

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24).into_font())
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| RdfError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| RdfError::PlotError(format!("{:?}", e)))?;

    let points: Vec<(f64, f64)> = curve
        .radius
        .iter()
        .zip(curve.g.iter())
        .map(|(r, g)| (*r, g.min(y_max)))
        .collect();

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            LINE_COLOR.stroke_width(2),
        ))
        .map_err(|e| RdfError::PlotError(format!("{:?}", e)))?;

    if style.markers {
        chart
            .draw_series(
                points
                    .iter()
                    .map(|p| Circle::new(*p, 2, LINE_COLOR.filled())),
            )
            .map_err(|e| RdfError::PlotError(format!("{:?}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        assert_eq!(grid_shape(1), (1, 1));
        assert_eq!(grid_shape(2), (1, 2));
        assert_eq!(grid_shape(3), (2, 2));
        assert_eq!(grid_shape(4), (2, 2));
        assert_eq!(grid_shape(5), (2, 3));
    }

    #[test]
    fn test_empty_curve_not_rendered() {
        let curve = RdfCurve {
            radius: vec![],
            g: vec![],
            shell_volume: vec![],
            counts: vec![],
            discarded: 0,
            peak: None,
        };
        let style = PlotStyle {
            width: 400,
            height: 300,
            y_max: None,
            markers: false,
        };
        let path = std::env::temp_dir().join("rdfkit_empty_curve.svg");

        assert!(matches!(
            generate_rdf_plot(&curve, &path, "empty", &style, true),
            Err(RdfError::PlotError(_))
        ));
    }
}
