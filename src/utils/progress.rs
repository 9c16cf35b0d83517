//! # 进度条工具
//!
//! 封装 `indicatif`，为批量提取提供统一的进度条样式。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 创建按文件计数的进度条；`visible` 为假时不绘制
pub fn file_progress_bar(len: u64, message: &str, visible: bool) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta}) {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    if !visible {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar_still_counts() {
        let pb = file_progress_bar(3, "Extracting", false);
        pb.inc(2);
        assert_eq!(pb.position(), 2);
        assert!(pb.is_hidden());
    }
}
