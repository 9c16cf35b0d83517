//! # tclog - TeraChem 输出提取库
//!
//! 从 TeraChem 的各类输出文件中提取结构化的量子化学结果：
//! 原子数、分子几何、力常数矩阵、振动频率、电子能量、零点能与势能面扫描。
//!
//! ## 支持的文件
//! - 优化、频率、单点、扫描作业的主输出 (`output.out`)
//! - 坐标文件 (`*.xyz`，含 `optim.xyz` 多帧)
//! - 几何表 (`*.geometry`)
//! - 能量摘要 (`results.dat`)
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── log.rs      (TeraChemLog：读取、识别、分派)
//!   ├── parsers/    (布局识别与各提取策略)
//!   ├── models/     (几何、Hessian、频率、扫描数据模型)
//!   ├── elements.rs (元素与同位素质量表)
//!   ├── units.rs    (物理常数与单位换算)
//!   └── error.rs    (错误处理)
//! ```

pub mod elements;
pub mod error;
pub mod log;
pub mod models;
pub mod parsers;
pub mod units;

pub use error::{FormatError, LogError, Result};
pub use log::TeraChemLog;
pub use parsers::LogLayout;
