//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `inspect`: 识别单个文件并列出能提取的全部信息
//! - `scan`: 导出势能面扫描
//! - `collect`: 批量提取电子能量并排序
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: inspect, scan, collect

pub mod collect;
pub mod inspect;
pub mod scan;

use clap::{Parser, Subcommand};

/// tclog - TeraChem 输出提取工具
#[derive(Parser)]
#[command(name = "tclog")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Extract structured results from TeraChem output files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Classify a file and print every quantity it provides
    Inspect(inspect::InspectArgs),

    /// Print and export the PES scan of a TeraChem log
    Scan(scan::ScanArgs),

    /// Extract and rank electronic energies from many files in parallel
    Collect(collect::CollectArgs),
}
