//! # inspect 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/inspect.rs`

use clap::Args;
use std::path::PathBuf;

/// inspect 子命令参数
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// TeraChem output, .xyz, .geometry or results.dat file
    pub file: PathBuf,

    /// Print the summary as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also print the Cartesian coordinates
    #[arg(long, default_value_t = false)]
    pub geometry: bool,
}
