//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `trajectory`: MD 轨迹快照的 RDF
//! - `lattice`: 理想晶体结构的理论 RDF
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: trajectory, lattice

pub mod lattice;
pub mod trajectory;

use clap::{Parser, Subcommand, ValueEnum};

/// rdfkit - 径向分布函数计算工具
#[derive(Parser)]
#[command(name = "rdfkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Radial distribution functions for MD trajectories and ideal crystal lattices",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute g(r) for snapshots of an MD trajectory
    Trajectory(trajectory::TrajectoryArgs),

    /// Compute the theoretical g(r) of ideal crystal lattices (fcc, bcc, hcp, sc)
    Lattice(lattice::LatticeArgs),
}

/// RDF 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (r, g, shell volume, count)
    Csv,
    /// Two-column text file (r, g)
    Dat,
}

impl OutputFormat {
    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
            OutputFormat::Dat => "dat",
        }
    }

    /// 是否为图像格式
    pub fn is_image(&self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Svg)
    }
}
