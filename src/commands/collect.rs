//! # collect 命令实现
//!
//! 批量提取目录中 TeraChem 文件的电子能量，按能量排序输出。
//!
//! ## 功能
//! - 按模式收集文件（可递归）
//! - 跨文件并行提取
//! - 终端表格与完整 CSV 排名
//! - 失败文件汇总
//!
//! ## 依赖关系
//! - 使用 `cli/collect.rs` 定义的参数
//! - 使用 `batch/` 收集与并行执行
//! - 使用 `utils/output.rs`

use super::write_csv;
use crate::batch::{BatchResult, BatchRunner, FileCollector, ProcessResult};
use crate::cli::collect::CollectArgs;
use crate::utils::output;

use std::path::PathBuf;
use tabled::{Table, Tabled};
use tclog::error::CliError;
use tclog::models::EnergyRecord;
use tclog::TeraChemLog;

/// 排名表格行
#[derive(Debug, Clone, Tabled)]
struct ResultRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Layout")]
    layout: String,
    #[tabled(rename = "Energy (kJ/mol)")]
    energy: String,
    #[tabled(rename = "ΔE (kJ/mol)")]
    delta_e: String,
}

/// 单个文件：(路径, 布局, 能量 J/mol)
fn extract_energy(path: &PathBuf) -> ProcessResult<(String, String, f64)> {
    let file = path.display().to_string();
    match TeraChemLog::new(path).and_then(|log| log.load_energy().map(|e| (log.layout(), e))) {
        Ok((layout, energy)) => ProcessResult::Success((file, layout.to_string(), energy)),
        Err(e) => {
            tracing::debug!("{}: {}", file, e);
            ProcessResult::Failed(file, e.to_string())
        }
    }
}

/// 执行 collect 命令
pub fn execute(args: CollectArgs) -> Result<(), CliError> {
    output::print_header("Collecting TeraChem Energies");

    if !args.dir.exists() {
        return Err(CliError::DirectoryNotFound {
            path: args.dir.display().to_string(),
        });
    }

    let files = FileCollector::new(args.dir.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matching '{}' in '{}'",
            args.pattern,
            args.dir.display()
        ));
        return Ok(());
    }

    let runner = BatchRunner::new(args.jobs).show_progress(files.len() > 1);
    output::print_info(&format!(
        "Extracting energies from {} files with {} threads...",
        files.len(),
        runner.jobs()
    ));

    let result = runner.run(&files, extract_energy)?;
    output::print_info(&format!(
        "{} of {} files yielded an energy",
        result.success(),
        result.total()
    ));
    let failed = result.failed();
    let BatchResult { outputs, failures } = result;
    let records = EnergyRecord::rank(outputs);

    if records.is_empty() {
        output::print_warning("No file yielded an electronic energy.");
    } else {
        output::print_header(&format!(
            "Top {} Files by Electronic Energy",
            args.top_n.min(records.len())
        ));

        let rows: Vec<ResultRow> = records
            .iter()
            .take(args.top_n)
            .map(|r| ResultRow {
                rank: r.rank,
                file: r.file.clone(),
                layout: r.layout.clone(),
                energy: format!("{:.4}", r.energy_j_per_mol / 1000.0),
                delta_e: format!("{:.4}", r.relative_kj_per_mol),
            })
            .collect();
        println!("{}", Table::new(&rows));

        write_csv(&records, &args.output)?;
        output::print_success(&format!(
            "Full ranking saved to '{}'",
            args.output.display()
        ));
    }

    if failed > 0 {
        output::print_warning(&format!("{} files failed:", failed));
        for (file, reason) in &failures {
            output::print_failure(file, reason);
        }
    }

    Ok(())
}
