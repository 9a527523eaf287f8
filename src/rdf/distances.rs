//! # 原子对距离枚举
//!
//! 生成排序后的原子对距离集合 (DistanceSet)，供分箱使用。
//!
//! ## 两种模式
//! - MD 快照：单一笛卡尔原子集合内所有无序对 `i < j`，仅保留 `d < cutoff`
//! - 理想晶格：每个基原子到同晶胞内 `j > i` 的基原子，以及到全部周期镜像，
//!   不做截断过滤
//!
//! 这是整个计算中唯一的 O(n²) 步骤。外层循环每完成一次，通过 [`Progress`]
//! 报告一次进度（仅用于显示，不影响结果）。
//!
//! ## 依赖关系
//! - 被 `rdf/mod.rs` 调用
//! - 使用 `models/structure.rs` 的 UnitCell, AtomSet

use crate::error::{RdfError, Result};
use crate::models::{AtomSet, Coordinates, UnitCell};

/// 进度观察者
pub trait Progress {
    /// 外层循环已完成 `done` / `total`
    fn advance(&self, done: usize, total: usize);
}

/// 不报告进度
pub struct NoProgress;

impl Progress for NoProgress {
    fn advance(&self, _done: usize, _total: usize) {}
}

/// 升序排列的距离集合
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceSet {
    distances: Vec<f64>,
}

impl DistanceSet {
    /// 从任意顺序的距离构建（内部排序）
    pub fn from_unsorted(mut distances: Vec<f64>) -> Self {
        distances.sort_by(|a, b| a.total_cmp(b));
        DistanceSet { distances }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// MD 快照的原子对距离（严格小于截断半径）
pub fn snapshot_distances(
    atoms: &AtomSet,
    cutoff: f64,
    progress: &dyn Progress,
) -> Result<DistanceSet> {
    atoms.expect_coordinates(Coordinates::Cartesian)?;

    let positions = atoms.positions();
    let nr_atoms = positions.len();
    let mut distances = Vec::new();

    for i in 0..nr_atoms {
        for j in (i + 1)..nr_atoms {
            let d = distance(&positions[i], &positions[j]);
            if d < cutoff {
                distances.push(d);
            }
        }
        progress.advance(i + 1, nr_atoms);
    }

    if distances.is_empty() {
        return Err(RdfError::EmptyDistanceSet(format!(
            "{} atoms, no pair closer than cutoff {}",
            nr_atoms, cutoff
        )));
    }

    Ok(DistanceSet::from_unsorted(distances))
}

/// 理想晶格的原子对距离（基原子 × 基原子 + 基原子 × 镜像）
pub fn lattice_distances(
    cell: &UnitCell,
    basis: &AtomSet,
    expanded: &AtomSet,
    progress: &dyn Progress,
) -> Result<DistanceSet> {
    basis.expect_coordinates(Coordinates::Fractional)?;
    expanded.expect_coordinates(Coordinates::Fractional)?;

    if expanded.is_empty() {
        return Err(RdfError::EmptyDistanceSet(
            "expanded lattice image set is empty".to_string(),
        ));
    }

    let basis = basis.to_cartesian(cell);
    let images = expanded.to_cartesian(cell);
    let basis = basis.positions();
    let images = images.positions();

    let nr_atoms = basis.len();
    let mut distances = Vec::with_capacity(nr_atoms * images.len());

    for i in 0..nr_atoms {
        let p1 = &basis[i];
        for p2 in &basis[(i + 1)..] {
            distances.push(distance(p1, p2));
        }
        for p2 in images {
            distances.push(distance(p1, p2));
        }
        progress.advance(i + 1, nr_atoms);
    }

    if distances.is_empty() {
        return Err(RdfError::EmptyDistanceSet(
            "lattice basis contains no atoms".to_string(),
        ));
    }

    Ok(DistanceSet::from_unsorted(distances))
}

/// 欧几里得距离
fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
