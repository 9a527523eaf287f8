//! # trajectory 子命令 CLI 定义
//!
//! 从 MD 轨迹文件读取快照并计算 RDF。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/trajectory.rs`

use crate::cli::OutputFormat;

use clap::Args;
use std::path::PathBuf;

/// trajectory 子命令参数
#[derive(Args, Debug)]
pub struct TrajectoryArgs {
    /// Input trajectory file (blocks of: atom count, comment, "<index> <x> <y> <z>" lines)
    pub input: PathBuf,

    /// Output file; with --all-snapshots a "_NNNN" suffix is added per snapshot
    #[arg(short, long, default_value = "rdf.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Cutoff radius in Å
    #[arg(long, default_value_t = 7.0, env = "RDFKIT_CUTOFF")]
    pub cutoff: f64,

    /// Bin width in Å
    #[arg(long, default_value_t = 0.1, env = "RDFKIT_BINSIZE")]
    pub binsize: f64,

    /// Snapshot to analyze (1-based, default: last snapshot)
    #[arg(long, conflicts_with = "all_snapshots")]
    pub snapshot: Option<usize>,

    /// Compute one independent RDF per snapshot
    #[arg(long, default_value_t = false)]
    pub all_snapshots: bool,

    /// Fixed upper limit of the g(r) axis
    #[arg(long)]
    pub y_max: Option<f64>,

    /// Draw the curve without data point markers
    #[arg(long, default_value_t = false)]
    pub no_markers: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: snapshot description)
    #[arg(long)]
    pub title: Option<String>,

    /// Overwrite existing per-snapshot output files (--all-snapshots only)
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Number of parallel jobs (0 = auto, --all-snapshots only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Number of coordination shells to list in the summary table
    #[arg(long, default_value_t = 5)]
    pub shells: usize,
}
