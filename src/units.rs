//! # 物理常数与单位换算
//!
//! TeraChem 输出使用原子单位 (Hartree, Bohr)，对外统一换算为
//! J/mol、Å 与 J/m²。
//!
//! ## 依赖关系
//! - 被 `parsers/` 使用
//! - 无外部模块依赖

/// Hartree 能量 (J)
pub const HARTREE: f64 = 4.359_744_34e-18;

/// 阿伏伽德罗常数 (mol⁻¹)
pub const AVOGADRO: f64 = 6.022_141_79e23;

/// Bohr 半径 (m)
pub const BOHR: f64 = 5.291_772_109_2e-11;

/// 普朗克常数 (J·s)
pub const PLANCK: f64 = 6.626_068_96e-34;

/// 真空光速 (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// 1 Bohr 对应的 Å 数
pub const BOHR_TO_ANGSTROM: f64 = BOHR * 1e10;

/// Hartree/粒子 -> J/mol
pub fn hartree_to_j_per_mol(e: f64) -> f64 {
    e * HARTREE * AVOGADRO
}

/// Hartree/Bohr² -> J/m²
pub fn hartree_per_bohr2_to_si(k: f64) -> f64 {
    k * HARTREE / (BOHR * BOHR)
}

/// 波数 (cm⁻¹) -> 每摩尔能量 (J/mol)
pub fn wavenumber_to_j_per_mol(nu: f64) -> f64 {
    PLANCK * SPEED_OF_LIGHT * nu * 100.0 * AVOGADRO
}

/// 谐振子零点能 ½ Σ hcν̃，单位 J/mol
pub fn harmonic_zero_point_energy(frequencies: &[f64]) -> f64 {
    0.5 * frequencies
        .iter()
        .map(|&nu| wavenumber_to_j_per_mol(nu))
        .sum::<f64>()
}
