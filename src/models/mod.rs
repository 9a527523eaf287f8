//! # 数据模型模块
//!
//! 定义晶胞、原子集合与轨迹快照的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`rdf/` 和 `commands/` 使用
//! - 子模块: structure

pub mod structure;

pub use structure::{AtomSet, Coordinates, Snapshot, UnitCell};
