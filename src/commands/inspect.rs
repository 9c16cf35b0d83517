//! # inspect 命令实现
//!
//! 识别单个文件的布局，逐项尝试全部提取操作。
//! 某项失败不会中断，只在表格下方列出原因。
//!
//! ## 依赖关系
//! - 使用 `cli/inspect.rs` 定义的参数
//! - 使用 `tclog::TeraChemLog`, `tclog::models::LogSummary`
//! - 使用 `utils/output.rs`

use crate::cli::inspect::InspectArgs;
use crate::utils::output;

use serde::Serialize;
use tabled::{Table, Tabled};
use tclog::error::CliError;
use tclog::models::{Geometry, LogSummary};
use tclog::{elements, units, TeraChemLog};

/// 汇总表格行
#[derive(Debug, Clone, Tabled)]
struct QuantityRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 坐标表格行
#[derive(Debug, Clone, Tabled)]
struct AtomRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Element")]
    element: String,
    #[tabled(rename = "X (Å)")]
    x: String,
    #[tabled(rename = "Y (Å)")]
    y: String,
    #[tabled(rename = "Z (Å)")]
    z: String,
    #[tabled(rename = "Mass (amu)")]
    mass: String,
}

/// JSON 输出
#[derive(Serialize)]
struct InspectReport<'a> {
    #[serde(flatten)]
    summary: &'a LogSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    geometry: Option<Geometry>,
}

/// 执行 inspect 命令
pub fn execute(args: InspectArgs) -> Result<(), CliError> {
    let log = TeraChemLog::new(&args.file)?;
    let summary = LogSummary::collect(&log);
    let geometry = if args.geometry {
        log.load_geometry().ok()
    } else {
        None
    };

    if args.json {
        let report = InspectReport {
            summary: &summary,
            geometry,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print_header(&format!("{} ({})", args.file.display(), log.layout()));
    println!("{}", Table::new(summary_rows(&summary)));

    if let Some(g) = &geometry {
        println!();
        println!("{}", Table::new(atom_rows(g)));
    }

    if !summary.failures.is_empty() {
        println!();
        output::print_separator();
        for (item, reason) in &summary.failures {
            output::print_failure(item, reason);
        }
    }

    Ok(())
}

fn summary_rows(summary: &LogSummary) -> Vec<QuantityRow> {
    let mut rows = Vec::new();
    let mut push = |quantity: &str, value: Option<String>| {
        if let Some(value) = value {
            rows.push(QuantityRow {
                quantity: quantity.to_string(),
                value,
            });
        }
    };

    push("Atoms", summary.num_atoms.map(|n| n.to_string()));
    push("Formula", summary.formula.clone());
    push(
        "Energy",
        summary.energy_j_per_mol.map(|e| {
            format!(
                "{} ({:.10} Eh)",
                output::format_kj(e),
                e / units::hartree_to_j_per_mol(1.0)
            )
        }),
    );
    push(
        "Zero-point energy",
        summary.zpe_j_per_mol.map(output::format_kj),
    );
    push(
        "Spin multiplicity",
        summary.spin_multiplicity.map(|m| m.to_string()),
    );
    push(
        "Vibrational modes",
        summary.num_frequencies.map(|n| n.to_string()),
    );
    push(
        "Imaginary frequency",
        summary.negative_frequency.map(|v| format!("{:.4} cm-1", v)),
    );
    push(
        "Hessian",
        summary.hessian_dim.map(|d| format!("{} x {} (J/m^2)", d, d)),
    );
    push(
        "Scan points",
        summary.scan_points.map(|n| format!("{} (closed)", n)),
    );

    rows
}

fn atom_rows(geometry: &Geometry) -> Vec<AtomRow> {
    geometry
        .coordinates
        .iter()
        .zip(&geometry.atomic_numbers)
        .zip(&geometry.masses)
        .enumerate()
        .map(|(i, ((xyz, &z), &mass))| AtomRow {
            index: i + 1,
            element: elements::by_number(z)
                .map(|e| e.symbol.to_string())
                .unwrap_or_else(|| z.to_string()),
            x: format!("{:.6}", xyz[0]),
            y: format!("{:.6}", xyz[1]),
            z: format!("{:.6}", xyz[2]),
            mass: format!("{:.6}", mass),
        })
        .collect()
}
