//! # 势能面扫描数据模型
//!
//! 角度 (rad) 与相对能量 (J/mol) 两个等长序列，首尾闭合：
//! 最后一项位于 2π，能量与第一项相同。
//!
//! ## 依赖关系
//! - 被 `parsers/scan.rs` 使用
//! - 被 `commands/scan.rs` 使用

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanSeries {
    /// 相对于最低点的能量 (J/mol)
    pub energies: Vec<f64>,

    /// 扫描角 (rad)，[0, 2π]
    pub angles: Vec<f64>,
}

/// 单个扫描点（导出 CSV 用）
#[derive(Debug, Clone, Serialize)]
pub struct ScanPoint {
    pub angle_rad: f64,
    pub angle_deg: f64,
    pub energy_j_per_mol: f64,
}

impl ScanSeries {
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// 最大势垒 (J/mol)
    pub fn barrier(&self) -> f64 {
        self.energies.iter().copied().fold(0.0, f64::max)
    }

    pub fn points(&self) -> impl Iterator<Item = ScanPoint> + '_ {
        self.angles
            .iter()
            .zip(self.energies.iter())
            .map(|(&a, &e)| ScanPoint {
                angle_rad: a,
                angle_deg: a.to_degrees(),
                energy_j_per_mol: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_points_and_barrier() {
        let series = ScanSeries {
            energies: vec![0.0, 1200.0, 0.0],
            angles: vec![0.0, PI, 2.0 * PI],
        };
        assert_eq!(series.len(), 3);
        assert_eq!(series.barrier(), 1200.0);
        let points: Vec<_> = series.points().collect();
        assert!((points[1].angle_deg - 180.0).abs() < 1e-9);
    }
}
