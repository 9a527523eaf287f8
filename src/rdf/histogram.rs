//! # 径向分箱与归一化
//!
//! 将升序距离集合按球壳分箱，并除以球壳体积得到 g(r)。
//!
//! ## 分箱规则
//! - `nr_bins = ceil(cutoff / binsize)`
//! - 第 i 个箱中心 `i * b`，球壳 `[(i - 0.5) b, (i + 0.5) b)`
//! - 球壳体积 `4/3 π (r2³ - r1³)`；第 0 个箱内半径为负，公式保持不变
//! - 单个前向游标扫描排序后的距离，最后一个箱外的距离计入 `discarded`
//!
//! ## 依赖关系
//! - 被 `rdf/mod.rs` 调用
//! - 使用 `rdf/distances.rs` 的 DistanceSet

use crate::error::{RdfError, Result};
use crate::rdf::distances::DistanceSet;

use std::f64::consts::PI;

/// 分箱数量上限
const MAX_BINS: usize = 10_000_000;

/// 默认首峰阈值
pub const DEFAULT_PEAK_THRESHOLD: f64 = 0.1;

/// RDF 计算参数（截断半径与箱宽，单位 Å）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RdfParams {
    pub cutoff: f64,
    pub binsize: f64,
}

impl RdfParams {
    /// 创建并校验参数
    pub fn new(cutoff: f64, binsize: f64) -> Result<Self> {
        if !(binsize.is_finite() && binsize > 0.0) {
            return Err(RdfError::InvalidConfig(format!(
                "binsize must be positive, got {}",
                binsize
            )));
        }
        if !(cutoff.is_finite() && cutoff > 0.0) {
            return Err(RdfError::InvalidConfig(format!(
                "cutoff must be positive, got {}",
                cutoff
            )));
        }

        let params = RdfParams { cutoff, binsize };
        if params.nr_bins() > MAX_BINS {
            return Err(RdfError::InvalidConfig(format!(
                "cutoff / binsize = {} bins exceeds the limit of {}",
                params.nr_bins(),
                MAX_BINS
            )));
        }
        Ok(params)
    }

    /// 箱数量
    pub fn nr_bins(&self) -> usize {
        (self.cutoff / self.binsize).ceil() as usize
    }
}

/// RDF 曲线（各字段长度均为 nr_bins）
#[derive(Debug, Clone, PartialEq)]
pub struct RdfCurve {
    /// 箱中心半径（峰归一化后为 r / r0）
    pub radius: Vec<f64>,
    /// g(r)（峰归一化后为 g / g0）
    pub g: Vec<f64>,
    /// 球壳体积 (Å³)
    pub shell_volume: Vec<f64>,
    /// 每个箱的原子对计数
    pub counts: Vec<usize>,
    /// 超出最后一个箱外沿而未计数的距离数
    pub discarded: usize,
    /// 峰归一化使用的 (r0, g0)
    pub peak: Option<(f64, f64)>,
}

/// 配位壳层摘要
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    pub radius: f64,
    pub count: usize,
    pub g: f64,
    /// 截至该壳层的累计原子对数
    pub cumulative: usize,
}

/// 分箱并按球壳体积归一化
pub fn build_curve(distances: &DistanceSet, params: &RdfParams) -> Result<RdfCurve> {
    if distances.is_empty() {
        return Err(RdfError::EmptyDistanceSet(
            "binning requires at least one distance".to_string(),
        ));
    }

    let sorted = distances.as_slice();
    let nr_bins = params.nr_bins();
    let binsize = params.binsize;

    let mut radius = Vec::with_capacity(nr_bins);
    let mut shell_volume = Vec::with_capacity(nr_bins);
    let mut counts = vec![0usize; nr_bins];
    let mut cursor = 0usize;

    for (i, count) in counts.iter_mut().enumerate() {
        let fi = i as f64;
        let r1 = (fi - 0.5) * binsize;
        let r2 = (fi + 0.5) * binsize;

        radius.push(fi * binsize);
        shell_volume.push(4.0 / 3.0 * PI * (r2.powi(3) - r1.powi(3)));

        while cursor < sorted.len() && sorted[cursor] < r2 {
            *count += 1;
            cursor += 1;
        }
    }

    let g = counts
        .iter()
        .zip(shell_volume.iter())
        .map(|(&c, &v)| c as f64 / v)
        .collect();

    Ok(RdfCurve {
        radius,
        g,
        shell_volume,
        counts,
        discarded: distances.len() - cursor,
        peak: None,
    })
}

impl RdfCurve {
    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }

    /// 已计数的原子对总数
    pub fn total_counts(&self) -> usize {
        self.counts.iter().sum()
    }

    /// 第一个 g >= threshold 的箱
    pub fn first_peak_index(&self, threshold: f64) -> Option<usize> {
        self.g.iter().position(|&g| g >= threshold)
    }

    /// 以首峰 (r0, g0) 重新缩放，使首峰位于 (1, 1)
    pub fn normalize_to_first_peak(&self, threshold: f64) -> Result<RdfCurve> {
        let idx = self
            .first_peak_index(threshold)
            .ok_or(RdfError::NoPeakFound { threshold })?;

        let r0 = self.radius[idx];
        let g0 = self.g[idx];
        if r0 <= 0.0 {
            return Err(RdfError::DegeneratePeak);
        }

        Ok(RdfCurve {
            radius: self.radius.iter().map(|r| r / r0).collect(),
            g: self.g.iter().map(|g| g / g0).collect(),
            shell_volume: self.shell_volume.clone(),
            counts: self.counts.clone(),
            discarded: self.discarded,
            peak: Some((r0, g0)),
        })
    }

    /// 前 limit 个非空箱
    pub fn coordination_shells(&self, limit: usize) -> Vec<Shell> {
        let mut cumulative = 0;
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .take(limit)
            .map(|(i, &count)| {
                cumulative += count;
                Shell {
                    radius: self.radius[i],
                    count,
                    g: self.g[i],
                    cumulative,
                }
            })
            .collect()
    }
}
