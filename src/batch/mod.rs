//! # 批量处理模块
//!
//! 并行执行相互独立的 RDF 计算（每个快照或每个晶体结构一个任务）。
//!
//! ## 功能
//! - 基于 rayon 线程池的并行计算
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchRunner, BatchSummary, JobOutcome};
