//! # scan 命令实现
//!
//! 读取势能面扫描，打印表格并导出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `tclog::TeraChemLog`
//! - 使用 `utils/output.rs`

use super::write_csv;
use crate::cli::scan::ScanArgs;
use crate::utils::output;

use tabled::{Table, Tabled};
use tclog::error::CliError;
use tclog::models::{ScanPoint, ScanSeries};
use tclog::TeraChemLog;

/// 扫描表格行
#[derive(Debug, Clone, Tabled)]
struct ScanRow {
    #[tabled(rename = "Point")]
    index: usize,
    #[tabled(rename = "Angle (deg)")]
    angle: String,
    #[tabled(rename = "ΔE (kJ/mol)")]
    energy: String,
}

fn scan_rows(points: &[ScanPoint]) -> Vec<ScanRow> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| ScanRow {
            index: i + 1,
            angle: format!("{:.2}", p.angle_deg),
            energy: format!("{:.4}", p.energy_j_per_mol / 1000.0),
        })
        .collect()
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<(), CliError> {
    output::print_header("Reading PES Scan");

    let log = TeraChemLog::new(&args.file)?;
    let scan: ScanSeries = log.load_scan_energies()?;
    let points: Vec<ScanPoint> = scan.points().collect();

    output::print_info(&format!(
        "{} scan points in '{}' (last point closes the loop at 360°)",
        points.len(),
        args.file.display()
    ));
    println!("{}", Table::new(scan_rows(&points)));

    output::print_info(&format!(
        "Highest barrier: {}",
        output::format_kj(scan.barrier())
    ));

    write_csv(&points, &args.output)?;
    output::print_success(&format!("Scan saved to '{}'", args.output.display()));

    Ok(())
}
