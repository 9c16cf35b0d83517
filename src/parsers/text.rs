//! # 文本提取辅助函数
//!
//! ## 依赖关系
//! - 被 `parsers/` 各子模块使用
//! - 无外部模块依赖

/// 提取指定标记之后的第一个数字
pub fn number_after(s: &str, marker: &str) -> Option<f64> {
    let pos = s.find(marker)?;
    let after = &s[pos + marker.len()..];
    after.split_whitespace().next()?.parse().ok()
}

/// 提取指定标记之前的最后一个数字
pub fn number_before(s: &str, marker: &str) -> Option<f64> {
    let pos = s.find(marker)?;
    let before = &s[..pos];
    before.split_whitespace().last()?.parse().ok()
}

/// 提取行中第一个可解析为浮点数的字段
pub fn first_number(s: &str) -> Option<f64> {
    s.split_whitespace().find_map(|w| w.parse::<f64>().ok())
}

/// 块结束行：空行或分隔线
pub fn is_block_end(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with("---") || t.starts_with("===") || t.starts_with('*')
}

/// 解析 `元素 x y z` 原子行
///
/// 返回 (元素标记, 坐标)。字段数不是 4 或坐标无法解析时返回错误原因。
pub fn parse_atom_row(line: &str) -> Result<(&str, [f64; 3]), String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(format!(
            "expected an element and 3 coordinates, found {} fields",
            parts.len()
        ));
    }
    let mut xyz = [0.0; 3];
    for (k, token) in parts[1..].iter().enumerate() {
        xyz[k] = token
            .parse()
            .map_err(|_| format!("'{}' is not a coordinate", token))?;
    }
    Ok((parts[0], xyz))
}
