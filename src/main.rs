//! # tclog - TeraChem 输出提取工具
//!
//! 将 TeraChem 输出文件中的几何、Hessian、频率、能量与扫描数据
//! 提取为表格、JSON 或 CSV。
//!
//! ## 子命令
//! - `inspect` - 识别文件并列出全部可提取信息
//! - `scan`    - 导出势能面扫描
//! - `collect` - 批量提取电子能量并排序
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── tclog   (提取库：parsers/, models/)
//!   ├── batch/      (文件收集与并行执行)
//!   └── utils/      (输出、进度条、日志)
//! ```

mod batch;
mod cli;
mod commands;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
