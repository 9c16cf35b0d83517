//! # 美化输出工具
//!
//! 提供统一的终端输出样式。诊断日志走 `tracing`（stderr），
//! 这里只负责面向用户的状态行。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印某项提取失败（不中断）
pub fn print_failure(item: &str, reason: &str) {
    let first_line = reason.lines().next().unwrap_or(reason);
    println!("{} {}: {}", "[--]".dimmed(), item, first_line.dimmed());
}

/// J/mol 格式化为 kJ/mol
pub fn format_kj(j_per_mol: f64) -> String {
    format!("{:.4} kJ/mol", j_per_mol / 1000.0)
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
