//! # lattice 子命令实现
//!
//! 计算理想晶体结构的理论 RDF，并可选按首峰归一化以便跨结构比较。
//!
//! ## 功能
//! - 每个结构一个独立任务（并行）
//! - 多个结构绘制在同一张网格图中
//! - 数据文件按结构名加后缀分别输出
//!
//! ## 依赖关系
//! - 使用 `cli/lattice.rs` 定义的 LatticeArgs
//! - 使用 `rdf/presets.rs` 构建结构
//! - 使用 `batch/` 并行计算

use crate::batch::BatchRunner;
use crate::cli::lattice::LatticeArgs;
use crate::cli::OutputFormat;
use crate::commands::report;
use crate::error::Result;
use crate::rdf::plot::{self, PlotStyle};
use crate::rdf::presets::{self, CrystalStructure, LatticeStructure};
use crate::rdf::{self, NoProgress, RdfCurve, RdfParams};
use crate::utils::output;

/// 执行 lattice 命令
pub fn execute(args: LatticeArgs) -> Result<()> {
    output::print_header("Radial Distribution Function: Ideal Lattices");

    let params = RdfParams::new(args.cutoff, args.binsize)?;
    output::print_rdf_params(&params);

    let structures = build_structures(&args)?;
    for (kind, structure) in &structures {
        rdf::lattice::image_count(&structure.cell, params.cutoff, structure.basis.len())?;
        let [dp, dq, dr] = rdf::lattice::image_bounds(&structure.cell, params.cutoff);
        output::print_info(&format!(
            "{}: a = {:.4} Å, {} basis atoms, image range ±({}, {}, {})",
            structure.name,
            lattice_constant_for(&args, *kind),
            structure.basis.len(),
            dp,
            dq,
            dr
        ));
    }

    let runner = BatchRunner::new(args.jobs);
    let results = runner.map(&structures, "Computing lattice RDFs", |(_, structure)| {
        compute_curve(structure, &params, &args)
    })?;

    let mut curves: Vec<(String, RdfCurve)> = Vec::with_capacity(structures.len());
    for ((_, structure), result) in structures.iter().zip(results) {
        curves.push((structure.name.clone(), result?));
    }

    for (name, curve) in &curves {
        output::print_separator();
        output::print_success(&format!("{} RDF computed", name));
        report::print_curve_summary(curve);
        let unit = if curve.peak.is_some() { "r/r0" } else { "r in Å" };
        report::print_shell_table(
            curve,
            args.shells,
            &format!("{}: first {} coordination shells ({})", name, args.shells, unit),
        );
    }

    write_outputs(&args, &curves)
}

/// 解析结构列表（去重，保持顺序）并构建预设
fn build_structures(args: &LatticeArgs) -> Result<Vec<(CrystalStructure, LatticeStructure)>> {
    let mut kinds: Vec<CrystalStructure> = Vec::new();
    for kind in &args.structure {
        if !kinds.contains(kind) {
            kinds.push(*kind);
        }
    }

    kinds
        .into_iter()
        .map(|kind| {
            presets::preset(kind, lattice_constant_for(args, kind), args.c_over_a)
                .map(|structure| (kind, structure))
        })
        .collect()
}

fn lattice_constant_for(args: &LatticeArgs, kind: CrystalStructure) -> f64 {
    args.lattice_constant.unwrap_or_else(|| kind.default_lattice_constant())
}

/// 单个结构的 RDF（可选首峰归一化）
fn compute_curve(
    structure: &LatticeStructure,
    params: &RdfParams,
    args: &LatticeArgs,
) -> Result<RdfCurve> {
    let curve = rdf::lattice_rdf(structure, params, &NoProgress)?;
    if args.normalize_peak {
        curve.normalize_to_first_peak(args.peak_threshold)
    } else {
        Ok(curve)
    }
}

/// 写出结果：图像格式多结构合并为网格图，数据格式按结构分文件
fn write_outputs(args: &LatticeArgs, curves: &[(String, RdfCurve)]) -> Result<()> {
    let format = args
        .format
        .unwrap_or_else(|| report::guess_format_from_extension(&args.output));

    let style = PlotStyle {
        width: args.width,
        height: args.height,
        y_max: args.y_max,
        markers: false,
    };

    output::print_separator();

    if let [(name, curve)] = curves {
        report::write_curve(curve, &args.output, format, name, &style)?;
        output::print_written(&args.output.display().to_string());
    } else if format.is_image() {
        plot::generate_grid_plot(curves, &args.output, &style, format == OutputFormat::Svg)?;
        output::print_written(&args.output.display().to_string());
    } else {
        for (name, curve) in curves {
            let path = report::with_suffix(&args.output, &name.to_lowercase(), format);
            report::write_curve(curve, &path, format, name, &style)?;
            output::print_written(&path.display().to_string());
        }
    }

    output::print_success("Lattice RDF calculation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(argv: &[&str]) -> LatticeArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Lattice(args) => args,
            _ => panic!("expected lattice subcommand"),
        }
    }

    #[test]
    fn test_default_structures() {
        let args = parse(&["rdfkit", "lattice"]);
        assert_eq!(args.structure, CrystalStructure::ALL.to_vec());
        assert_eq!(args.binsize, 0.01);
        assert!(!args.normalize_peak);
    }

    #[test]
    fn test_structures_deduplicated_in_order() {
        let args = parse(&["rdfkit", "lattice", "-s", "sc,fcc,sc"]);
        let structures = build_structures(&args).unwrap();
        let kinds: Vec<CrystalStructure> = structures.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec![CrystalStructure::Sc, CrystalStructure::Fcc]);
    }

    #[test]
    fn test_explicit_lattice_constant_overrides_default() {
        let args = parse(&["rdfkit", "lattice", "-s", "sc", "-a", "3.0"]);
        assert_eq!(lattice_constant_for(&args, CrystalStructure::Sc), 3.0);

        let args = parse(&["rdfkit", "lattice", "-s", "fcc"]);
        let a = lattice_constant_for(&args, CrystalStructure::Fcc);
        assert!((a - 2.5 * 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_compute_normalized_curve() {
        let args = parse(&["rdfkit", "lattice", "-s", "sc", "--normalize-peak"]);
        let structures = build_structures(&args).unwrap();
        let params = RdfParams::new(args.cutoff, args.binsize).unwrap();
        let curve = compute_curve(&structures[0].1, &params, &args).unwrap();

        let (r0, _) = curve.peak.unwrap();
        assert!((r0 - 2.5).abs() < 0.006);
    }

    #[test]
    fn test_huge_cutoff_rejected_before_compute() {
        let args = parse(&[
            "rdfkit", "lattice", "-s", "fcc", "--cutoff", "5000000", "--binsize", "1",
        ]);
        let params = RdfParams::new(args.cutoff, args.binsize).unwrap();
        let structures = build_structures(&args).unwrap();
        let structure = &structures[0].1;

        assert!(rdf::lattice::image_count(&structure.cell, params.cutoff, 1).is_err());
        assert!(compute_curve(structure, &params, &args).is_err());
    }

    #[test]
    fn test_invalid_binsize_rejected() {
        let args = parse(&["rdfkit", "lattice", "--binsize", "0"]);
        assert!(RdfParams::new(args.cutoff, args.binsize).is_err());
    }
}
