//! # lattice 子命令 CLI 定义
//!
//! 计算理想晶体结构 (FCC/BCC/HCP/SC) 的理论 RDF。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/lattice.rs`

use crate::cli::OutputFormat;
use crate::rdf::presets::{CrystalStructure, DEFAULT_C_OVER_A};
use crate::rdf::DEFAULT_PEAK_THRESHOLD;

use clap::Args;
use std::path::PathBuf;

/// lattice 子命令参数
#[derive(Args, Debug)]
pub struct LatticeArgs {
    /// Crystal structures to compute (comma separated)
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = CrystalStructure::ALL
    )]
    pub structure: Vec<CrystalStructure>,

    /// Lattice constant in Å (default: 2.5·√2 for fcc/bcc, 2.5 for hcp/sc)
    #[arg(short = 'a', long)]
    pub lattice_constant: Option<f64>,

    /// c/a axial ratio for hcp
    #[arg(long, default_value_t = DEFAULT_C_OVER_A)]
    pub c_over_a: f64,

    /// Cutoff radius in Å
    #[arg(long, default_value_t = 7.0, env = "RDFKIT_CUTOFF")]
    pub cutoff: f64,

    /// Bin width in Å
    #[arg(long, default_value_t = 0.01, env = "RDFKIT_BINSIZE")]
    pub binsize: f64,

    /// Rescale each curve so that its first peak sits at (1, 1)
    #[arg(long, default_value_t = false)]
    pub normalize_peak: bool,

    /// g(r) threshold that identifies the first peak
    #[arg(long, default_value_t = DEFAULT_PEAK_THRESHOLD)]
    pub peak_threshold: f64,

    /// Output file; several structures share one image or get a "_<structure>" suffix
    #[arg(short, long, default_value = "rdf_lattice.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Fixed upper limit of the g(r) axis
    #[arg(long)]
    pub y_max: Option<f64>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Number of coordination shells to list in the summary table
    #[arg(long, default_value_t = 5)]
    pub shells: usize,
}
