//! # 径向分布函数计算模块
//!
//! 从 MD 快照或理想晶格计算 g(r)。
//!
//! ## 流程
//! ```text
//! AtomSet ──► (lattice::expand) ──► distances ──► histogram ──► RdfCurve
//! ```
//!
//! ## 子模块
//! - `lattice`: 周期镜像扩展
//! - `distances`: 原子对距离枚举
//! - `histogram`: 分箱、球壳体积归一化、首峰归一化
//! - `presets`: FCC/BCC/HCP/SC 预设
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/structure.rs`

pub mod distances;
pub mod export;
pub mod histogram;
pub mod lattice;
pub mod plot;
pub mod presets;

pub use distances::{DistanceSet, NoProgress, Progress};
pub use histogram::{RdfCurve, RdfParams, DEFAULT_PEAK_THRESHOLD};
pub use presets::{CrystalStructure, LatticeStructure};

use crate::error::Result;
use crate::models::AtomSet;

/// MD 快照的 RDF
pub fn snapshot_rdf(
    atoms: &AtomSet,
    params: &RdfParams,
    progress: &dyn Progress,
) -> Result<RdfCurve> {
    let distances = distances::snapshot_distances(atoms, params.cutoff, progress)?;
    histogram::build_curve(&distances, params)
}

/// 理想晶格的理论 RDF
pub fn lattice_rdf(
    structure: &LatticeStructure,
    params: &RdfParams,
    progress: &dyn Progress,
) -> Result<RdfCurve> {
    let expanded = lattice::expand(&structure.cell, &structure.basis, params.cutoff)?;
    let distances =
        distances::lattice_distances(&structure.cell, &structure.basis, &expanded, progress)?;
    histogram::build_curve(&distances, params)
}
