//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式，并作为距离枚举的进度观察者。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/` 模块使用
//! - 使用 `indicatif` crate
//! - 为 `rdf::Progress` 提供实现

use crate::rdf::Progress;

use indicatif::{ProgressBar, ProgressStyle};

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// 创建百分比进度条（用于原子对距离枚举）
pub fn create_percent_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new(100);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.green/white}] {percent:>3}% {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("█▓░");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

impl Progress for ProgressBar {
    fn advance(&self, done: usize, total: usize) {
        if self.length() != Some(total as u64) {
            self.set_length(total as u64);
        }
        self.set_position(done as u64);
    }
}
