//! # 振动频率与构象数据模型
//!
//! `FrequencySet` 是从日志中读到的原始频率（不含平动/转动），
//! `Conformer` 是交给统计力学模块的模式容器，这里只放一个谐振子模式。
//!
//! ## 依赖关系
//! - 被 `parsers/frequencies.rs` 使用
//! - 无外部模块依赖

use serde::Serialize;

/// 振动频率集合
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencySet {
    /// 实频 (cm⁻¹)，按日志顺序
    pub frequencies: Vec<f64>,

    /// 自旋多重度
    pub spin_multiplicity: u32,
}

/// 谐振子模式
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarmonicOscillator {
    /// 频率 (cm⁻¹)
    pub frequencies: Vec<f64>,
}

/// 构象
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conformer {
    /// 基态能量 (J/mol)，由调用方设置
    pub e0: f64,

    /// 模式列表
    pub modes: Vec<HarmonicOscillator>,

    pub spin_multiplicity: u32,
}

impl Conformer {
    /// 由频率集合构建：只含振动模式
    pub fn from_frequencies(set: &FrequencySet) -> Self {
        Conformer {
            e0: 0.0,
            modes: vec![HarmonicOscillator {
                frequencies: set.frequencies.clone(),
            }],
            spin_multiplicity: set.spin_multiplicity,
        }
    }

    /// 全部振动频率
    pub fn frequencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.modes.iter().flat_map(|m| m.frequencies.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_frequencies_single_mode() {
        let set = FrequencySet {
            frequencies: vec![1198.6, 1276.2, 1563.6],
            spin_multiplicity: 1,
        };
        let conformer = Conformer::from_frequencies(&set);
        assert_eq!(conformer.modes.len(), 1);
        assert_eq!(conformer.e0, 0.0);
        assert_eq!(conformer.spin_multiplicity, 1);
        assert_eq!(conformer.frequencies().count(), 3);
    }
}
