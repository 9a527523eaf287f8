//! # 晶格周期镜像扩展
//!
//! 将晶胞内的基原子沿三个晶格方向复制到整数偏移 (p, q, r)，
//! 覆盖截断半径内所有可能的近邻。
//!
//! ## 算法概述
//! 1. 每个晶格方向 k 的镜像边界 `d_k = ceil(cutoff / |a_k|)`
//! 2. p, q, r 分别遍历半开区间 `[-d_k, d_k)`
//! 3. 跳过 (0, 0, 0)，即基原子本身
//!
//! 边界是保守估计，会包含截断半径之外的镜像；多余的距离在分箱时被丢弃。
//!
//! ## 依赖关系
//! - 被 `rdf/mod.rs` 调用
//! - 使用 `models/structure.rs` 的 UnitCell, AtomSet

use crate::error::{RdfError, Result};
use crate::models::{AtomSet, Coordinates, UnitCell};

/// 镜像原子数量上限
const MAX_IMAGES: usize = 50_000_000;

/// 计算三个晶格方向上的镜像偏移边界
pub fn image_bounds(cell: &UnitCell, cutoff: f64) -> [i64; 3] {
    [0, 1, 2].map(|k| (cutoff / cell.row_norm(k)).ceil() as i64)
}

/// 扩展后的镜像原子数 `n * (2 d_p)(2 d_q)(2 d_r) - n`，超过上限时报错
pub fn image_count(cell: &UnitCell, cutoff: f64, nr_atoms: usize) -> Result<usize> {
    let too_many = || {
        RdfError::InvalidConfig(format!(
            "cutoff {} needs more than {} periodic images, reduce --cutoff",
            cutoff, MAX_IMAGES
        ))
    };

    let cells = image_bounds(cell, cutoff)
        .iter()
        .try_fold(1usize, |acc, &d| {
            usize::try_from(d)
                .ok()
                .and_then(|d| d.checked_mul(2))
                .and_then(|span| acc.checked_mul(span))
        })
        .ok_or_else(too_many)?;

    let count = cells
        .checked_mul(nr_atoms)
        .map(|n| n - nr_atoms)
        .ok_or_else(too_many)?;
    if count > MAX_IMAGES {
        return Err(too_many());
    }
    Ok(count)
}

/// 扩展基原子的周期镜像（分数坐标）
///
/// 输出原子数为 `n * (2 d_p)(2 d_q)(2 d_r) - n`，顺序为 p, q, r 外层循环、
/// 基原子内层循环。
pub fn expand(cell: &UnitCell, basis: &AtomSet, cutoff: f64) -> Result<AtomSet> {
    basis.expect_coordinates(Coordinates::Fractional)?;
    cell.validate()?;

    if !(cutoff.is_finite() && cutoff > 0.0) {
        return Err(RdfError::InvalidConfig(format!(
            "cutoff must be positive, got {}",
            cutoff
        )));
    }
    if basis.is_empty() {
        return Err(RdfError::InvalidArgument(
            "lattice basis contains no atoms".to_string(),
        ));
    }

    let nr_images = image_count(cell, cutoff, basis.len())?;
    let [dp, dq, dr] = image_bounds(cell, cutoff);
    let mut images = Vec::with_capacity(nr_images);

    for p in -dp..dp {
        for q in -dq..dq {
            for r in -dr..dr {
                if p == 0 && q == 0 && r == 0 {
                    continue;
                }
                let offset = [p as f64, q as f64, r as f64];
                for atom in basis.positions() {
                    images.push([
                        atom[0] + offset[0],
                        atom[1] + offset[1],
                        atom[2] + offset[2],
                    ]);
                }
            }
        }
    }

    Ok(AtomSet::fractional(images))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(a: f64) -> UnitCell {
        UnitCell::identity().scaled(a)
    }

    #[test]
    fn test_image_bounds_cubic() {
        assert_eq!(image_bounds(&cubic(2.5), 7.0), [3, 3, 3]);
        assert_eq!(image_bounds(&cubic(2.5), 5.0), [2, 2, 2]);
    }

    #[test]
    fn test_image_bounds_anisotropic() {
        let cell = UnitCell::from_vectors([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 4.0]]);
        assert_eq!(image_bounds(&cell, 3.0), [3, 2, 1]);
    }

    #[test]
    fn test_expanded_size() {
        let basis = AtomSet::fractional(vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]]);
        let expanded = expand(&cubic(2.5), &basis, 7.0).unwrap();

        // 2 * 6^3 - 2
        assert_eq!(expanded.len(), 2 * 6 * 6 * 6 - 2);
        assert_eq!(expanded.coordinates(), Coordinates::Fractional);
    }

    #[test]
    fn test_zero_offset_excluded() {
        let basis = AtomSet::fractional(vec![[0.25, 0.0, 0.0]]);
        let expanded = expand(&cubic(1.0), &basis, 1.0).unwrap();

        assert_eq!(expanded.len(), 7);
        assert!(!expanded.positions().contains(&[0.25, 0.0, 0.0]));
        // 半开区间：包含 -1，不包含 +1
        assert!(expanded.positions().contains(&[-0.75, -1.0, -1.0]));
        assert!(!expanded.positions().contains(&[1.25, 0.0, 0.0]));
    }

    #[test]
    fn test_expand_rejects_cartesian_basis() {
        let basis = AtomSet::cartesian(vec![[0.0; 3]]);
        assert!(expand(&cubic(1.0), &basis, 2.0).is_err());
    }

    #[test]
    fn test_expand_rejects_empty_basis_and_bad_cutoff() {
        let empty = AtomSet::fractional(vec![]);
        assert!(expand(&cubic(1.0), &empty, 2.0).is_err());

        let basis = AtomSet::fractional(vec![[0.0; 3]]);
        assert!(matches!(
            expand(&cubic(1.0), &basis, 0.0),
            Err(RdfError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_image_count_matches_expansion() {
        let basis = AtomSet::fractional(vec![[0.0; 3], [0.5, 0.5, 0.5]]);
        let count = image_count(&cubic(2.5), 7.0, basis.len()).unwrap();
        assert_eq!(count, expand(&cubic(2.5), &basis, 7.0).unwrap().len());
    }

    #[test]
    fn test_huge_cutoff_rejected_before_allocation() {
        let basis = AtomSet::fractional(vec![[0.0; 3]]);

        // (2 * 1000)^3 镜像超过上限
        assert!(matches!(
            expand(&cubic(1.0), &basis, 1000.0),
            Err(RdfError::InvalidConfig(_))
        ));
        // 边界乘积溢出 usize
        assert!(matches!(
            expand(&UnitCell::identity(), &basis, 1e7),
            Err(RdfError::InvalidConfig(_))
        ));
        assert!(matches!(
            image_count(&UnitCell::identity(), 1e300, 1),
            Err(RdfError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_expand_rejects_degenerate_cell() {
        let cell = UnitCell::from_vectors([[1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let basis = AtomSet::fractional(vec![[0.0; 3]]);
        assert!(matches!(
            expand(&cell, &basis, 2.0),
            Err(RdfError::DegenerateCell { .. })
        ));
    }
}
