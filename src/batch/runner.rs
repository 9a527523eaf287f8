//! # 批量执行器
//!
//! 并行执行批量任务。任务之间不共享可变状态，结果按输入顺序返回。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/trajectory.rs`, `commands/lattice.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{RdfError, Result};
use crate::utils::progress;

use rayon::prelude::*;
use std::path::PathBuf;

/// 单个 RDF 任务的结果
#[derive(Debug)]
pub enum JobOutcome {
    /// 已写出输出文件
    Written(PathBuf),
    /// 输出已存在，未重新计算
    Skipped(PathBuf),
    /// 计算或写出失败
    Failed { job: String, error: RdfError },
}

/// 批量任务汇总
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// (任务名称, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl BatchSummary {
    /// 按输入顺序汇总任务结果
    pub fn collect(outcomes: impl IntoIterator<Item = JobOutcome>) -> Self {
        let mut summary = BatchSummary::default();
        for outcome in outcomes {
            match outcome {
                JobOutcome::Written(path) => summary.written.push(path),
                JobOutcome::Skipped(path) => summary.skipped.push(path),
                JobOutcome::Failed { job, error } => {
                    summary.failures.push((job, error.to_string()))
                }
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 自动检测 CPU 数）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行映射，结果保持输入顺序
    pub fn map<T, R, F>(&self, items: &[T], message: &str, processor: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, message);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| RdfError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<R> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = processor(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();
        Ok(results)
    }

    /// 并行执行 RDF 任务并汇总
    pub fn run<T, F>(&self, items: &[T], message: &str, job: F) -> Result<BatchSummary>
    where
        T: Sync,
        F: Fn(&T) -> JobOutcome + Sync + Send,
    {
        let outcomes = self.map(items, message, job)?;
        Ok(BatchSummary::collect(outcomes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_order() {
        let runner = BatchRunner::new(2);
        let items: Vec<usize> = (0..50).collect();
        let squares = runner.map(&items, "test", |x| x * x).unwrap();

        assert_eq!(squares.len(), 50);
        assert_eq!(squares[7], 49);
        assert_eq!(squares[49], 49 * 49);
    }

    #[test]
    fn test_run_collects_outcomes() {
        let runner = BatchRunner::new(0);
        assert!(runner.jobs() >= 1);

        let items = vec![1, 2, 3, 4];
        let summary = runner
            .run(&items, "test", |x| {
                let path = PathBuf::from(format!("rdf_{:04}.csv", x));
                match x % 3 {
                    0 => JobOutcome::Skipped(path),
                    1 => JobOutcome::Written(path),
                    _ => JobOutcome::Failed {
                        job: format!("snapshot #{}", x),
                        error: RdfError::DegeneratePeak,
                    },
                }
            })
            .unwrap();

        assert_eq!(summary.written.len(), 2);
        assert_eq!(summary.written[1], PathBuf::from("rdf_0004.csv"));
        assert_eq!(summary.skipped, vec![PathBuf::from("rdf_0003.csv")]);
        assert_eq!(summary.total(), 4);
        assert!(summary.has_failures());
        assert_eq!(summary.failures[0].0, "snapshot #2");
    }
}
