//! # 元素与同位素表
//!
//! 元素符号 -> (原子序数, 最高丰度同位素质量 amu)。
//! 几何解析时用于补全原子序数和质量。
//!
//! ## 依赖关系
//! - 被 `parsers/xyz.rs`, `parsers/geometry_table.rs`, `parsers/program_log.rs` 使用
//! - 无外部模块依赖

use serde::Serialize;

/// 单个元素的参考数据
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementData {
    pub symbol: &'static str,
    pub atomic_number: u32,
    /// 最高丰度同位素质量 (amu)
    pub mass: f64,
}

macro_rules! element {
    ($sym:literal, $z:literal, $mass:literal) => {
        ElementData {
            symbol: $sym,
            atomic_number: $z,
            mass: $mass,
        }
    };
}

/// 按原子序数排列，下标 = Z - 1
static ELEMENTS: [ElementData; 54] = [
    element!("H", 1, 1.00782503207),
    element!("He", 2, 4.00260325415),
    element!("Li", 3, 7.016004548),
    element!("Be", 4, 9.012182201),
    element!("B", 5, 11.009305406),
    element!("C", 6, 12.0),
    element!("N", 7, 14.00307400478),
    element!("O", 8, 15.99491461956),
    element!("F", 9, 18.998403224),
    element!("Ne", 10, 19.99244017542),
    element!("Na", 11, 22.98976966),
    element!("Mg", 12, 23.985041699),
    element!("Al", 13, 26.981538627),
    element!("Si", 14, 27.97692653246),
    element!("P", 15, 30.973761629),
    element!("S", 16, 31.972070999),
    element!("Cl", 17, 34.968852682),
    element!("Ar", 18, 39.96238312251),
    element!("K", 19, 38.963706679),
    element!("Ca", 20, 39.962590983),
    element!("Sc", 21, 44.955911909),
    element!("Ti", 22, 47.947946281),
    element!("V", 23, 50.943959507),
    element!("Cr", 24, 51.940507472),
    element!("Mn", 25, 54.938045141),
    element!("Fe", 26, 55.934937475),
    element!("Co", 27, 58.933195048),
    element!("Ni", 28, 57.935342907),
    element!("Cu", 29, 62.929597474),
    element!("Zn", 30, 63.929142222),
    element!("Ga", 31, 68.925573587),
    element!("Ge", 32, 73.921177767),
    element!("As", 33, 74.921596478),
    element!("Se", 34, 79.916521271),
    element!("Br", 35, 78.918337087),
    element!("Kr", 36, 83.911507),
    element!("Rb", 37, 84.911789738),
    element!("Sr", 38, 87.905612124),
    element!("Y", 39, 88.905848295),
    element!("Zr", 40, 89.904704416),
    element!("Nb", 41, 92.906378058),
    element!("Mo", 42, 97.905408169),
    element!("Tc", 43, 97.907216),
    element!("Ru", 44, 101.904349312),
    element!("Rh", 45, 102.905504292),
    element!("Pd", 46, 105.903485715),
    element!("Ag", 47, 106.90509682),
    element!("Cd", 48, 113.90335854),
    element!("In", 49, 114.903878484),
    element!("Sn", 50, 119.902194676),
    element!("Sb", 51, 120.903815686),
    element!("Te", 52, 129.906224399),
    element!("I", 53, 126.904472681),
    element!("Xe", 54, 131.904153457),
];

/// 按元素符号查找（大小写不敏感）
pub fn by_symbol(symbol: &str) -> Option<&'static ElementData> {
    ELEMENTS
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}

/// 按原子序数查找
pub fn by_number(z: u32) -> Option<&'static ElementData> {
    if z == 0 {
        return None;
    }
    ELEMENTS.get(z as usize - 1)
}

/// 解析坐标行首的元素标记：元素符号或原子序数
///
/// TeraChem 偶尔在符号后附加编号（如 `C1`、`H12`），这里会去掉尾部数字。
pub fn lookup(token: &str) -> Option<&'static ElementData> {
    if let Ok(z) = token.parse::<u32>() {
        return by_number(z);
    }
    let symbol = token.trim_end_matches(|c: char| c.is_ascii_digit());
    by_symbol(symbol)
}
