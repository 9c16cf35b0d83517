//! # 日志初始化
//!
//! 库代码只调用 `tracing` 宏；二进制在这里安装 stderr 上的 fmt 层。
//! 级别由 `-v` / `-q` 决定，默认只显示警告。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber`

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// `-v` 次数与 `-q` 对应的日志级别
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// 安装全局 subscriber
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let installed = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .try_init();

    if installed.is_err() {
        tracing::debug!("A global tracing subscriber is already installed");
    }
}
