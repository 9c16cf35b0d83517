//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `tclog` 库, `utils/`
//! - 子模块: inspect, scan, collect

pub mod collect;
pub mod inspect;
pub mod scan;

use crate::cli::Commands;
use serde::Serialize;
use std::path::Path;
use tclog::error::CliError;

/// 执行命令
pub fn run(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Scan(args) => scan::execute(args),
        Commands::Collect(args) => collect::execute(args),
    }
}

/// 将记录写入 CSV（表头取自字段名）
pub fn write_csv<T: Serialize>(rows: &[T], output_path: &Path) -> Result<(), CliError> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| CliError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tclog::models::EnergyRecord;
    use tempfile::TempDir;

    #[test]
    fn test_write_csv_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("energies.csv");
        let records = EnergyRecord::rank(vec![(
            "a.out".to_string(),
            "TeraChem output".to_string(),
            -1.0,
        )]);
        write_csv(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("rank,file,layout,energy_j_per_mol,relative_kj_per_mol")
        );
        assert_eq!(lines.next(), Some("1,a.out,TeraChem output,-1.0,0.0"));
    }
}
