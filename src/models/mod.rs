//! # 数据模型模块
//!
//! 定义几何、力常数矩阵、振动频率、扫描序列与汇总结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: structure, hessian, conformer, scan, calculation

pub mod calculation;
pub mod conformer;
pub mod hessian;
pub mod scan;
pub mod structure;

pub use calculation::{EnergyRecord, LogSummary};
pub use conformer::{Conformer, FrequencySet, HarmonicOscillator};
pub use hessian::HessianMatrix;
pub use scan::{ScanPoint, ScanSeries};
pub use structure::Geometry;
