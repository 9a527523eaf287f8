//! # 统一错误处理模块
//!
//! 定义 rdfkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// rdfkit 统一错误类型
#[derive(Error, Debug)]
pub enum RdfError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数 / 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Degenerate unit cell (volume = {volume:.3e})")]
    DegenerateCell { volume: f64 },

    #[error("Snapshot {requested} out of range (trajectory has {available} snapshots)")]
    SnapshotOutOfRange { requested: usize, available: usize },

    // ─────────────────────────────────────────────────────────────
    // 计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("No pair distances to bin ({0})")]
    EmptyDistanceSet(String),

    #[error("No bin reaches g(r) >= {threshold} within the cutoff")]
    NoPeakFound { threshold: f64 },

    #[error("First peak found at r = 0, cannot rescale radii")]
    DegeneratePeak,

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plot rendering failed: {0}")]
    PlotError(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl RdfError {
    /// 针对常见参数问题的修正建议
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            RdfError::EmptyDistanceSet(_) => {
                Some("increase --cutoff or check that the input holds at least two atoms")
            }
            RdfError::NoPeakFound { .. } => Some("lower --peak-threshold or increase --cutoff"),
            RdfError::DegeneratePeak => Some("use a smaller --binsize"),
            RdfError::SnapshotOutOfRange { .. } => {
                Some("snapshots are numbered from 1; omit --snapshot to use the last one")
            }
            RdfError::InvalidConfig(_) => {
                Some("check --cutoff/--binsize and the RDFKIT_CUTOFF/RDFKIT_BINSIZE variables")
            }
            _ => None,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RdfError>;
