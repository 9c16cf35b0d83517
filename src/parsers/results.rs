//! # `results.dat` 能量摘要解析器
//!
//! ## 格式说明
//! ```text
//! Ground state energy (a.u.):
//!       -114.5008455547
//! ```
//! 值可能与标签同行或位于下一个非空行；也可能整个文件只有一个数字。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 分派与分类
//! - 使用 `units.rs`

use super::text;
use super::{first_success, Extractor, LogLayout, Source};
use crate::error::Result;
use crate::models::Geometry;
use crate::units;

pub(crate) struct ResultsExtractor;

const AU_MARKER: &str = "(a.u.)";

/// 形如 `... energy (a.u.):` 的标签行
pub(crate) fn is_energy_label(line: &str) -> bool {
    line.to_lowercase().contains("energy") && line.contains(AU_MARKER)
}

/// 文件只有一个非空行且该行为单个数字时返回该数字
pub(crate) fn bare_scalar(lines: &[String]) -> Option<f64> {
    let mut non_blank = lines.iter().filter(|l| !l.trim().is_empty());
    let only = non_blank.next()?;
    if non_blank.next().is_some() {
        return None;
    }
    only.trim().parse().ok()
}

fn labelled_energy(src: Source<'_>) -> Result<f64> {
    let i = src
        .lines
        .iter()
        .rposition(|l| is_energy_label(l))
        .ok_or_else(|| src.missing("an 'energy (a.u.)' label"))?;

    let label = &src.lines[i];
    let after = &label[label.find(AU_MARKER).map(|p| p + AU_MARKER.len()).unwrap_or(0)..];
    let same_line = text::first_number(after.trim_start_matches(':'));

    let hartree = match same_line {
        Some(v) => v,
        None => {
            let (j, next) = src
                .lines
                .iter()
                .enumerate()
                .skip(i + 1)
                .find(|(_, l)| !l.trim().is_empty())
                .ok_or_else(|| src.malformed(i, "energy label is not followed by a value"))?;
            text::first_number(next)
                .ok_or_else(|| src.malformed(j, format!("'{}' is not an energy", next.trim())))?
        }
    };

    Ok(units::hartree_to_j_per_mol(hartree))
}

fn scalar_energy(src: Source<'_>) -> Result<f64> {
    bare_scalar(src.lines)
        .map(units::hartree_to_j_per_mol)
        .ok_or_else(|| src.missing("a single energy value"))
}

impl Extractor for ResultsExtractor {
    fn layout(&self) -> LogLayout {
        LogLayout::Results
    }

    fn number_of_atoms(&self, src: Source<'_>) -> Result<usize> {
        Err(self.unsupported(src, "Atom count"))
    }

    fn geometry(&self, src: Source<'_>) -> Result<Geometry> {
        Err(self.unsupported(src, "Geometry"))
    }

    fn energy(&self, src: Source<'_>) -> Result<f64> {
        first_success::<f64>(src, "electronic energy", &[labelled_energy, scalar_energy])
    }
}
