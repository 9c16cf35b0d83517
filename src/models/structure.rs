//! # 分子几何数据模型
//!
//! 坐标、原子序数与同位素质量三个等长序列。坐标单位统一为 Å。
//!
//! ## 依赖关系
//! - 被 `parsers/` 使用
//! - 无外部模块依赖

use serde::Serialize;

/// 分子几何快照
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    /// 笛卡尔坐标 (Å)
    pub coordinates: Vec<[f64; 3]>,

    /// 原子序数
    pub atomic_numbers: Vec<u32>,

    /// 同位素质量 (amu)
    pub masses: Vec<f64>,
}

impl Geometry {
    pub fn new() -> Self {
        Geometry {
            coordinates: Vec::new(),
            atomic_numbers: Vec::new(),
            masses: Vec::new(),
        }
    }

    pub fn push(&mut self, position: [f64; 3], atomic_number: u32, mass: f64) {
        self.coordinates.push(position);
        self.atomic_numbers.push(atomic_number);
        self.masses.push(mass);
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// 按比例缩放全部坐标（单位换算）
    pub fn scaled(mut self, factor: f64) -> Self {
        for p in &mut self.coordinates {
            for x in p.iter_mut() {
                *x *= factor;
            }
        }
        self
    }

    /// 总质量 (amu)
    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// 计算化学式（Hill 顺序：C、H 在前，其余按字母）
    pub fn formula(&self) -> String {
        use std::collections::BTreeMap;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for &z in &self.atomic_numbers {
            let symbol = crate::elements::by_number(z)
                .map(|e| e.symbol)
                .unwrap_or("X");
            *counts.entry(symbol).or_insert(0) += 1;
        }

        let mut ordered: Vec<(&str, usize)> = Vec::new();
        if counts.contains_key("C") {
            for s in ["C", "H"] {
                if let Some(n) = counts.remove(s) {
                    ordered.push((s, n));
                }
            }
        }
        ordered.extend(counts);

        ordered
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}
