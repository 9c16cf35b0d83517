//! # TeraChem `.geometry` 几何表解析器
//!
//! ## 格式说明
//! ```text
//! Type         X              Y              Z            Mass
//! C       0.6640965100   0.0039526500   0.0710079300  12.0000000000
//! H       1.2467586600   0.8898386900  -0.1613784000   1.0078250400
//! ```
//! 坐标单位 Å，质量列直接取自文件。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 分派与分类
//! - 使用 `elements.rs`, `models/structure.rs`

use super::{Extractor, LogLayout, Source};
use crate::elements;
use crate::error::Result;
use crate::models::Geometry;
use regex::Regex;
use std::sync::OnceLock;

pub(crate) struct GeometryTableExtractor;

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*Type\s+X\s+Y\s+Z\s+Mass\s*$").unwrap())
}

/// 是否为几何表表头
pub(crate) fn is_table_header(line: &str) -> bool {
    header_regex().is_match(line)
}

/// 最后一个表头之后的数据行号
fn table_rows(src: Source<'_>) -> Result<std::ops::Range<usize>> {
    let header = src
        .lines
        .iter()
        .rposition(|l| is_table_header(l))
        .ok_or_else(|| src.missing("geometry table header (Type X Y Z Mass)"))?;

    let start = header + 1;
    let end = src.lines[start..]
        .iter()
        .position(|l| l.trim().is_empty())
        .map(|k| start + k)
        .unwrap_or(src.lines.len());

    Ok(start..end)
}

impl Extractor for GeometryTableExtractor {
    fn layout(&self) -> LogLayout {
        LogLayout::GeometryTable
    }

    fn number_of_atoms(&self, src: Source<'_>) -> Result<usize> {
        Ok(table_rows(src)?.len())
    }

    fn geometry(&self, src: Source<'_>) -> Result<Geometry> {
        let mut geometry = Geometry::new();

        for i in table_rows(src)? {
            let parts: Vec<&str> = src.lines[i].split_whitespace().collect();
            if parts.len() != 5 {
                return Err(src.malformed(
                    i,
                    format!("expected 'Type X Y Z Mass', found {} fields", parts.len()),
                ));
            }

            let element = elements::lookup(parts[0])
                .ok_or_else(|| src.malformed(i, format!("unknown element '{}'", parts[0])))?;

            let mut values = [0.0; 4];
            for (k, token) in parts[1..].iter().enumerate() {
                values[k] = token
                    .parse()
                    .map_err(|_| src.malformed(i, format!("'{}' is not a number", token)))?;
            }

            geometry.push([values[0], values[1], values[2]], element.atomic_number, values[3]);
        }

        Ok(geometry)
    }

    fn energy(&self, src: Source<'_>) -> Result<f64> {
        Err(self.unsupported(src, "Electronic energy"))
    }
}
