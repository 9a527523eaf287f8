//! # trajectory 子命令实现
//!
//! 从 MD 轨迹计算 RDF。
//!
//! ## 功能
//! - 默认分析最后一个快照，或通过 `--snapshot` 指定
//! - `--all-snapshots` 时每个快照独立计算（并行），不做时间平均
//! - 输出图像 (PNG/SVG) 或数据文件 (CSV/DAT)
//!
//! ## 依赖关系
//! - 使用 `cli/trajectory.rs` 定义的 TrajectoryArgs
//! - 使用 `parsers/` 读取轨迹
//! - 使用 `rdf/` 进行计算
//! - 使用 `batch/` 并行处理多个快照

use crate::batch::{BatchRunner, JobOutcome};
use crate::cli::trajectory::TrajectoryArgs;
use crate::cli::OutputFormat;
use crate::commands::report;
use crate::error::{RdfError, Result};
use crate::models::Snapshot;
use crate::parsers;
use crate::rdf::plot::PlotStyle;
use crate::rdf::{self, NoProgress, RdfParams};
use crate::utils::{output, progress};

use std::path::PathBuf;

/// 执行 trajectory 命令
pub fn execute(args: TrajectoryArgs) -> Result<()> {
    output::print_header("Radial Distribution Function: MD Trajectory");

    // 先校验参数，再读取文件
    let params = RdfParams::new(args.cutoff, args.binsize)?;
    output::print_rdf_params(&params);

    let snapshots = parsers::read_snapshots(&args.input)?;
    if snapshots.is_empty() {
        return Err(RdfError::InvalidArgument(format!(
            "no snapshots found in '{}'",
            args.input.display()
        )));
    }
    output::print_success(&format!(
        "Read {} snapshots from '{}'",
        snapshots.len(),
        args.input.display()
    ));

    let format = args
        .format
        .unwrap_or_else(|| report::guess_format_from_extension(&args.output));

    let style = PlotStyle {
        width: args.width,
        height: args.height,
        y_max: args.y_max,
        markers: !args.no_markers,
    };

    if args.all_snapshots {
        execute_all(&args, &snapshots, &params, format, &style)
    } else {
        let snapshot = select_snapshot(&snapshots, args.snapshot)?;
        execute_single(&args, snapshot, &params, format, &style)
    }
}

/// 选择快照（1-based，None 表示最后一个）
pub fn select_snapshot(snapshots: &[Snapshot], requested: Option<usize>) -> Result<&Snapshot> {
    match requested {
        None => snapshots.last().ok_or(RdfError::SnapshotOutOfRange {
            requested: 0,
            available: 0,
        }),
        Some(n) if n >= 1 && n <= snapshots.len() => Ok(&snapshots[n - 1]),
        Some(n) => Err(RdfError::SnapshotOutOfRange {
            requested: n,
            available: snapshots.len(),
        }),
    }
}

/// 单快照模式
fn execute_single(
    args: &TrajectoryArgs,
    snapshot: &Snapshot,
    params: &RdfParams,
    format: OutputFormat,
    style: &PlotStyle,
) -> Result<()> {
    output::print_info(&format!(
        "Snapshot #{}: {} atoms ({})",
        snapshot.index,
        snapshot.atoms.len(),
        snapshot.comment
    ));

    let pb = progress::create_percent_bar("Counting pair distances");
    let result = rdf::snapshot_rdf(&snapshot.atoms, params, &pb);
    pb.finish_and_clear();
    let curve = result?;

    report::print_curve_summary(&curve);

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| snapshot_title(snapshot));
    report::write_curve(&curve, &args.output, format, &title, style)?;

    report::print_shell_table(
        &curve,
        args.shells,
        &format!("First {} coordination shells (r in Å)", args.shells),
    );
    output::print_success(&format!("RDF saved to '{}'", args.output.display()));

    Ok(())
}

/// 全部快照模式：每个快照一个独立输出文件
fn execute_all(
    args: &TrajectoryArgs,
    snapshots: &[Snapshot],
    params: &RdfParams,
    format: OutputFormat,
    style: &PlotStyle,
) -> Result<()> {
    let runner = BatchRunner::new(args.jobs);
    output::print_info(&format!(
        "Computing {} independent RDFs with {} jobs",
        snapshots.len(),
        runner.jobs()
    ));

    let summary = runner.run(snapshots, "Computing snapshot RDFs", |snapshot| {
        let output_path = snapshot_output_path(args, snapshot, format);
        if output_path.exists() && !args.overwrite {
            return JobOutcome::Skipped(output_path);
        }
        let title = args
            .title
            .as_ref()
            .map(|t| format!("{} #{}", t, snapshot.index))
            .unwrap_or_else(|| snapshot_title(snapshot));

        let written = rdf::snapshot_rdf(&snapshot.atoms, params, &NoProgress)
            .and_then(|curve| report::write_curve(&curve, &output_path, format, &title, style));

        match written {
            Ok(()) => JobOutcome::Written(output_path),
            Err(error) => JobOutcome::Failed {
                job: format!("snapshot #{}", snapshot.index),
                error,
            },
        }
    })?;

    output::print_batch_summary(&summary);
    if summary.has_failures() {
        return Err(RdfError::Other(format!(
            "{} of {} snapshots failed",
            summary.failures.len(),
            summary.total()
        )));
    }
    if !summary.skipped.is_empty() {
        output::print_info("Use --overwrite to recompute existing outputs");
    }

    Ok(())
}

fn snapshot_output_path(
    args: &TrajectoryArgs,
    snapshot: &Snapshot,
    format: OutputFormat,
) -> PathBuf {
    report::with_suffix(&args.output, &format!("{:04}", snapshot.index), format)
}

fn snapshot_title(snapshot: &Snapshot) -> String {
    format!("Snapshot #{} ({} atoms)", snapshot.index, snapshot.atoms.len())
}
