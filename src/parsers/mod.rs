//! # 解析器模块
//!
//! 提供 MD 轨迹文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: trajectory

pub mod trajectory;

use crate::error::{RdfError, Result};
use crate::models::Snapshot;
use std::path::Path;

/// 读取轨迹文件（检查文件存在性）
pub fn read_snapshots(path: &Path) -> Result<Vec<Snapshot>> {
    if !path.is_file() {
        return Err(RdfError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    trajectory::parse_trajectory_file(path)
}
