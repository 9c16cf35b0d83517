//! # scan 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// TeraChem scan log
    pub file: PathBuf,

    /// CSV file for the scan points (angle, energy)
    #[arg(short, long, default_value = "scan.csv")]
    pub output: PathBuf,
}
