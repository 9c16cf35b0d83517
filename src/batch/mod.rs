//! # 批量处理模块
//!
//! 提供跨文件的批量提取能力。
//!
//! ## 功能
//! - 收集匹配文件列表
//! - 并行处理
//! - 进度反馈与失败统计
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
