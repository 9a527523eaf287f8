//! # MD 轨迹文本格式解析器
//!
//! 解析由多个快照块组成的轨迹文件。
//!
//! ## 格式说明
//! ```text
//! N                      # 本快照原子数
//! comment line           # 注释行（忽略）
//! <index> <x> <y> <z>    # N 行原子坐标
//! ...
//! N                      # 下一个快照
//! ...
//! ```
//!
//! 文件结束、原子数行为空或 `N = 0` 时停止读取，`N = 0` 的块不计入结果。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/structure.rs`
//! - 使用 `regex` 匹配原子行

use crate::error::{RdfError, Result};
use crate::models::{AtomSet, Snapshot};

use regex::Regex;
use std::fs;
use std::path::Path;

const FORMAT: &str = "trajectory";

/// 原子行：整数序号 + 三个实数坐标，允许额外列
const ATOM_LINE_PATTERN: &str = r"^\s*(\d+)\s+([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s+([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s+([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)(?:\s|$)";

/// 读取轨迹文件中的全部快照
pub fn parse_trajectory_file(path: &Path) -> Result<Vec<Snapshot>> {
    let content = fs::read_to_string(path).map_err(|e| RdfError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_trajectory_content(&content, &path.display().to_string())
}

/// 从字符串内容解析轨迹
pub fn parse_trajectory_content(content: &str, source: &str) -> Result<Vec<Snapshot>> {
    let atom_line = Regex::new(ATOM_LINE_PATTERN).map_err(|e| RdfError::Other(e.to_string()))?;

    let mut lines = content.lines().enumerate();
    let mut snapshots: Vec<Snapshot> = Vec::new();

    while let Some((line_idx, count_line)) = lines.next() {
        let count_line = count_line.trim();
        if count_line.is_empty() {
            break;
        }

        let nr_atoms: usize = count_line.parse().map_err(|_| {
            parse_error(
                source,
                format!(
                    "line {}: expected atom count, found '{}'",
                    line_idx + 1,
                    count_line
                ),
            )
        })?;

        if nr_atoms == 0 {
            break;
        }

        let snapshot_index = snapshots.len() + 1;

        let comment = match lines.next() {
            Some((_, line)) => line.trim().to_string(),
            None => {
                return Err(parse_error(
                    source,
                    format!("snapshot {} is missing its comment line", snapshot_index),
                ))
            }
        };

        let mut positions = Vec::with_capacity(nr_atoms);
        for found in 0..nr_atoms {
            let (line_idx, line) = lines.next().ok_or_else(|| {
                parse_error(
                    source,
                    format!(
                        "snapshot {} truncated: expected {} atom lines, found {}",
                        snapshot_index, nr_atoms, found
                    ),
                )
            })?;

            let position = parse_atom_line(&atom_line, line).ok_or_else(|| {
                parse_error(
                    source,
                    format!("line {}: malformed atom line '{}'", line_idx + 1, line.trim()),
                )
            })?;
            positions.push(position);
        }

        snapshots.push(Snapshot::new(
            snapshot_index,
            comment,
            AtomSet::cartesian(positions),
        ));
    }

    Ok(snapshots)
}

/// 解析单行原子坐标，返回 [x, y, z]
fn parse_atom_line(pattern: &Regex, line: &str) -> Option<[f64; 3]> {
    let caps = pattern.captures(line)?;
    let x: f64 = caps.get(2)?.as_str().parse().ok()?;
    let y: f64 = caps.get(3)?.as_str().parse().ok()?;
    let z: f64 = caps.get(4)?.as_str().parse().ok()?;
    Some([x, y, z])
}

fn parse_error(source: &str, reason: String) -> RdfError {
    RdfError::ParseError {
        format: FORMAT.to_string(),
        path: source.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SNAPSHOTS: &str = "\
2
step 0
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3
step 100
1 0.5 0.5 0.5
2 -1.25 2.0 3.0e-1
3 4 5 6
";

    #[test]
    fn test_parse_two_snapshots() {
        let snapshots = parse_trajectory_content(TWO_SNAPSHOTS, "test").unwrap();

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].index, 1);
        assert_eq!(snapshots[0].comment, "step 0");
        assert_eq!(snapshots[0].atoms.len(), 2);
        assert_eq!(snapshots[0].atoms.positions()[1], [1.0, 0.0, 0.0]);

        assert_eq!(snapshots[1].index, 2);
        assert_eq!(snapshots[1].atoms.len(), 3);
        assert_eq!(snapshots[1].atoms.positions()[1], [-1.25, 2.0, 0.3]);
        assert_eq!(snapshots[1].atoms.positions()[2], [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_zero_atom_block_terminates() {
        let content = "1\nfirst\n1 0.0 0.0 0.0\n0\nempty\n1\nnever\n1 9.0 9.0 9.0\n";
        let snapshots = parse_trajectory_content(content, "test").unwrap();

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].comment, "first");
    }

    #[test]
    fn test_empty_input_yields_no_snapshots() {
        assert!(parse_trajectory_content("", "test").unwrap().is_empty());
        assert!(parse_trajectory_content("0\n", "test").unwrap().is_empty());
    }

    #[test]
    fn test_trailing_blank_line_ends_stream() {
        let content = "1\nc\n1 0.0 0.0 0.0\n\n";
        let snapshots = parse_trajectory_content(content, "test").unwrap();
        assert_eq!(snapshots.len(), 1);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let content = "1\nc\n7 1.0 2.0 3.0 0.25 extra\n";
        let snapshots = parse_trajectory_content(content, "test").unwrap();
        assert_eq!(snapshots[0].atoms.positions()[0], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_malformed_atom_line_is_fatal() {
        let content = "2\nc\n1 0.0 0.0 0.0\n2 abc 0.0 0.0\n";
        let err = parse_trajectory_content(content, "test").unwrap_err();
        match err {
            RdfError::ParseError { reason, .. } => assert!(reason.contains("line 4")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_coordinate_is_fatal() {
        let content = "1\nc\n1 0.0 0.0\n";
        assert!(parse_trajectory_content(content, "test").is_err());
    }

    #[test]
    fn test_truncated_block_is_fatal() {
        let content = "3\nc\n1 0.0 0.0 0.0\n2 1.0 0.0 0.0\n";
        let err = parse_trajectory_content(content, "test").unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn test_invalid_count_line_is_fatal() {
        let content = "two\nc\n";
        assert!(matches!(
            parse_trajectory_content(content, "test"),
            Err(RdfError::ParseError { .. })
        ));
    }
}
