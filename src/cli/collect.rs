//! # collect 子命令 CLI 定义
//!
//! 批量提取电子能量并按能量排序
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/collect.rs`

use clap::Args;
use std::path::PathBuf;

/// collect 子命令参数
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Directory containing TeraChem output files
    pub dir: PathBuf,

    /// Glob patterns for input files (comma separated)
    #[arg(long, default_value = "*.out,*.log,results.dat")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, env = "TCLOG_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// Number of lowest-energy files to print
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Filename for the ranked CSV output
    #[arg(short, long, default_value = "energies.csv")]
    pub output: PathBuf,
}
