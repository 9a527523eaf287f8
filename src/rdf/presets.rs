//! # 理想晶体结构预设
//!
//! 提供 FCC、BCC、HCP、SC 的原胞矩阵与分数坐标基原子。
//!
//! | 结构 | 晶格向量 (× a) | 基原子 |
//! |---|---|---|
//! | FCC | (½,½,0) (½,0,½) (0,½,½) | 原点 |
//! | BCC | (-½,½,½) (½,-½,½) (½,½,-½) | 原点 |
//! | HCP | (1,0,0) (-½,√3/2,0) (0,0,c/a) | 原点, (⅓,⅔,½) |
//! | SC  | 单位矩阵 | 原点 |
//!
//! 默认晶格常数取 Co 的参考值：FCC/BCC 为 `2.5·√2` Å，HCP/SC 为 `2.5` Å。
//!
//! ## 依赖关系
//! - 被 `rdf/mod.rs` 和 `commands/lattice.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{RdfError, Result};
use crate::models::{AtomSet, UnitCell};

use clap::ValueEnum;

/// 默认 HCP 轴比 c/a
pub const DEFAULT_C_OVER_A: f64 = 1.62;

/// 参考最近邻尺度 (Å)
const REFERENCE_SCALE: f64 = 2.5;

/// 晶体结构类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum CrystalStructure {
    /// Face-centered cubic
    Fcc,
    /// Body-centered cubic
    Bcc,
    /// Hexagonal close-packed
    Hcp,
    /// Simple cubic
    Sc,
}

impl std::fmt::Display for CrystalStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrystalStructure::Fcc => write!(f, "fcc"),
            CrystalStructure::Bcc => write!(f, "bcc"),
            CrystalStructure::Hcp => write!(f, "hcp"),
            CrystalStructure::Sc => write!(f, "sc"),
        }
    }
}

impl CrystalStructure {
    /// 全部预设（绘图顺序）
    pub const ALL: [CrystalStructure; 4] = [
        CrystalStructure::Fcc,
        CrystalStructure::Hcp,
        CrystalStructure::Bcc,
        CrystalStructure::Sc,
    ];

    /// 默认晶格常数 (Å)
    pub fn default_lattice_constant(&self) -> f64 {
        match self {
            CrystalStructure::Fcc | CrystalStructure::Bcc => REFERENCE_SCALE * 2.0_f64.sqrt(),
            CrystalStructure::Hcp | CrystalStructure::Sc => REFERENCE_SCALE,
        }
    }

    /// 图表标题
    pub fn title(&self) -> &'static str {
        match self {
            CrystalStructure::Fcc => "FCC",
            CrystalStructure::Bcc => "BCC",
            CrystalStructure::Hcp => "HCP",
            CrystalStructure::Sc => "SC",
        }
    }
}

/// 晶胞 + 分数坐标基原子
#[derive(Debug, Clone)]
pub struct LatticeStructure {
    pub name: String,
    pub cell: UnitCell,
    pub basis: AtomSet,
}

/// 构建预设结构
pub fn preset(
    kind: CrystalStructure,
    lattice_constant: f64,
    c_over_a: f64,
) -> Result<LatticeStructure> {
    if !(lattice_constant.is_finite() && lattice_constant > 0.0) {
        return Err(RdfError::InvalidConfig(format!(
            "lattice constant must be positive, got {}",
            lattice_constant
        )));
    }

    let (cell, basis) = match kind {
        CrystalStructure::Fcc => (
            UnitCell::from_vectors([[0.5, 0.5, 0.0], [0.5, 0.0, 0.5], [0.0, 0.5, 0.5]]),
            vec![[0.0, 0.0, 0.0]],
        ),
        CrystalStructure::Bcc => (
            UnitCell::from_vectors([[-0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, -0.5]]),
            vec![[0.0, 0.0, 0.0]],
        ),
        CrystalStructure::Hcp => {
            if !(c_over_a.is_finite() && c_over_a > 0.0) {
                return Err(RdfError::InvalidConfig(format!(
                    "c/a ratio must be positive, got {}",
                    c_over_a
                )));
            }
            (
                UnitCell::from_vectors([
                    [1.0, 0.0, 0.0],
                    [-0.5, 3.0_f64.sqrt() / 2.0, 0.0],
                    [0.0, 0.0, c_over_a],
                ]),
                vec![[0.0, 0.0, 0.0], [1.0 / 3.0, 2.0 / 3.0, 0.5]],
            )
        }
        CrystalStructure::Sc => (UnitCell::identity(), vec![[0.0, 0.0, 0.0]]),
    };

    Ok(LatticeStructure {
        name: kind.title().to_string(),
        cell: cell.scaled(lattice_constant),
        basis: AtomSet::fractional(basis),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcc_cell() {
        let s = preset(CrystalStructure::Fcc, 4.0, DEFAULT_C_OVER_A).unwrap();
        assert_eq!(s.cell.matrix[0], [2.0, 2.0, 0.0]);
        assert_eq!(s.cell.matrix[2], [0.0, 2.0, 2.0]);
        assert_eq!(s.basis.len(), 1);
        // 原胞体积 a³/4
        assert!((s.cell.volume().abs() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_bcc_cell_volume() {
        let s = preset(CrystalStructure::Bcc, 2.0, DEFAULT_C_OVER_A).unwrap();
        // 原胞体积 a³/2
        assert!((s.cell.volume().abs() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_hcp_basis_and_axis() {
        let s = preset(CrystalStructure::Hcp, 2.5, 1.62).unwrap();
        assert_eq!(s.basis.len(), 2);
        assert_eq!(s.basis.positions()[1], [1.0 / 3.0, 2.0 / 3.0, 0.5]);
        assert!((s.cell.row_norm(1) - 2.5).abs() < 1e-12);
        assert!((s.cell.row_norm(2) - 2.5 * 1.62).abs() < 1e-12);
    }

    #[test]
    fn test_sc_is_scaled_identity() {
        let s = preset(CrystalStructure::Sc, 3.0, DEFAULT_C_OVER_A).unwrap();
        assert_eq!(s.cell, UnitCell::identity().scaled(3.0));
    }

    #[test]
    fn test_default_lattice_constants() {
        let fcc = CrystalStructure::Fcc.default_lattice_constant();
        assert!((fcc - 2.5 * 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(CrystalStructure::Sc.default_lattice_constant(), 2.5);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(preset(CrystalStructure::Sc, 0.0, 1.62).is_err());
        assert!(preset(CrystalStructure::Hcp, 2.5, -1.0).is_err());
    }
}
