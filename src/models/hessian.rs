//! # 力常数矩阵 (Hessian)
//!
//! 3N×3N 方阵，按行主序存储，单位 J/m²。
//!
//! ## 依赖关系
//! - 被 `parsers/hessian.rs` 使用
//! - 无外部模块依赖

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HessianMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl HessianMatrix {
    /// 分配 dim×dim 零矩阵
    pub fn zeros(dim: usize) -> Self {
        HessianMatrix {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    /// 行/列数 (3N)
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.dim + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.dim + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.dim.max(1))
    }

    /// 转为嵌套 Vec，便于导出
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// 最大非对称偏差 max|H[i][j] - H[j][i]|
    pub fn max_asymmetry(&self) -> f64 {
        let mut worst: f64 = 0.0;
        for i in 0..self.dim {
            for j in (i + 1)..self.dim {
                worst = worst.max((self.get(i, j) - self.get(j, i)).abs());
            }
        }
        worst
    }

    /// 最大元素绝对值
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
    }

    /// 在相对容差内是否对称
    pub fn is_symmetric(&self, rel_tol: f64) -> bool {
        self.max_asymmetry() <= rel_tol * self.max_abs().max(f64::MIN_POSITIVE)
    }
}
