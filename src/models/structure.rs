//! # 原子结构数据模型
//!
//! 定义晶胞 (UnitCell)、原子集合 (AtomSet) 与轨迹快照 (Snapshot)。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `rdf/` 使用
//! - 无外部模块依赖

use crate::error::{RdfError, Result};

use serde::{Deserialize, Serialize};

/// 晶胞体积下限，低于此值视为退化晶胞
const DEGENERATE_VOLUME: f64 = 1e-10;

/// 晶胞矩阵
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitCell {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl UnitCell {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        UnitCell { matrix }
    }

    /// 单位矩阵（MD 笛卡尔坐标路径使用）
    pub fn identity() -> Self {
        UnitCell {
            matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// 整体缩放（晶格常数）
    pub fn scaled(self, factor: f64) -> Self {
        let mut matrix = self.matrix;
        for row in matrix.iter_mut() {
            for v in row.iter_mut() {
                *v *= factor;
            }
        }
        UnitCell { matrix }
    }

    /// 第 k 个晶格向量的长度
    pub fn row_norm(&self, k: usize) -> f64 {
        let v = self.matrix[k];
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    /// 计算晶胞体积（带符号）
    pub fn volume(&self) -> f64 {
        let a = self.matrix[0];
        let b = self.matrix[1];
        let c = self.matrix[2];

        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }

    /// 检查晶格向量线性无关
    pub fn validate(&self) -> Result<()> {
        let volume = self.volume();
        if !volume.is_finite() || volume.abs() < DEGENERATE_VOLUME {
            return Err(RdfError::DegenerateCell { volume });
        }
        Ok(())
    }

    /// 分数坐标转笛卡尔坐标（行向量左乘晶胞矩阵）
    pub fn to_cartesian(&self, frac: &[f64; 3]) -> [f64; 3] {
        let m = &self.matrix;
        [
            frac[0] * m[0][0] + frac[1] * m[1][0] + frac[2] * m[2][0],
            frac[0] * m[0][1] + frac[1] * m[1][1] + frac[2] * m[2][1],
            frac[0] * m[0][2] + frac[1] * m[1][2] + frac[2] * m[2][2],
        ]
    }
}

/// 坐标约定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coordinates {
    /// 实空间坐标 (Å)
    Cartesian,
    /// 相对晶胞基矢的分数坐标
    Fractional,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinates::Cartesian => write!(f, "cartesian"),
            Coordinates::Fractional => write!(f, "fractional"),
        }
    }
}

/// 有序原子坐标集合，集合内所有坐标使用同一约定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomSet {
    coordinates: Coordinates,
    positions: Vec<[f64; 3]>,
}

impl AtomSet {
    pub fn cartesian(positions: Vec<[f64; 3]>) -> Self {
        AtomSet {
            coordinates: Coordinates::Cartesian,
            positions,
        }
    }

    pub fn fractional(positions: Vec<[f64; 3]>) -> Self {
        AtomSet {
            coordinates: Coordinates::Fractional,
            positions,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 转换为笛卡尔坐标集合（已是笛卡尔坐标时原样返回）
    pub fn to_cartesian(&self, cell: &UnitCell) -> AtomSet {
        match self.coordinates {
            Coordinates::Cartesian => self.clone(),
            Coordinates::Fractional => {
                AtomSet::cartesian(self.positions.iter().map(|p| cell.to_cartesian(p)).collect())
            }
        }
    }

    /// 要求特定坐标约定
    pub fn expect_coordinates(&self, expected: Coordinates) -> Result<()> {
        if self.coordinates() != expected {
            return Err(RdfError::InvalidArgument(format!(
                "expected {} coordinates, got {}",
                expected,
                self.coordinates()
            )));
        }
        Ok(())
    }
}

/// MD 轨迹中的一个快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// 快照序号（从 1 开始）
    pub index: usize,

    /// 注释行
    pub comment: String,

    /// 原子坐标（笛卡尔）
    pub atoms: AtomSet,
}

impl Snapshot {
    pub fn new(index: usize, comment: impl Into<String>, atoms: AtomSet) -> Self {
        Snapshot {
            index,
            comment: comment.into(),
            atoms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cell_volume_cubic() {
        let cell = UnitCell::identity().scaled(5.0);
        assert!((cell.volume() - 125.0).abs() < 1e-9);
        assert!(cell.validate().is_ok());
    }

    #[test]
    fn test_degenerate_cell_rejected() {
        let cell = UnitCell::from_vectors([[1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(matches!(
            cell.validate(),
            Err(RdfError::DegenerateCell { .. })
        ));
    }

    #[test]
    fn test_row_norm() {
        let cell = UnitCell::from_vectors([[3.0, 4.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((cell.row_norm(0) - 5.0).abs() < 1e-12);
        assert!((cell.row_norm(1) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_fractional_to_cartesian() {
        let cell = UnitCell::from_vectors([[0.5, 0.5, 0.0], [0.5, 0.0, 0.5], [0.0, 0.5, 0.5]])
            .scaled(4.0);
        let atoms = AtomSet::fractional(vec![[1.0, 0.0, 0.0], [0.0, 1.0, 1.0]]);
        let cart = atoms.to_cartesian(&cell);

        assert_eq!(cart.coordinates(), Coordinates::Cartesian);
        assert_eq!(cart.positions()[0], [2.0, 2.0, 0.0]);
        assert_eq!(cart.positions()[1], [2.0, 2.0, 4.0]);
    }

    #[test]
    fn test_expect_coordinates() {
        let atoms = AtomSet::cartesian(vec![[0.0; 3]]);
        assert!(atoms.expect_coordinates(Coordinates::Cartesian).is_ok());
        assert!(atoms.expect_coordinates(Coordinates::Fractional).is_err());
    }
}
