//! # XYZ 坐标文件解析器
//!
//! 解析 TeraChem 读入或写出的 `.xyz` 文件，支持多帧（如 `optim.xyz`），
//! 取最后一帧。
//!
//! ## .xyz 格式说明
//! ```text
//! 4                                              # 原子数
//!    -114.5008455547 frame    1 xyz file ...      # 注释行（optim.xyz 中为能量）
//! C     -0.01222410     0.00018041    -0.00162116
//! ...
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 分派
//! - 使用 `elements.rs`, `models/structure.rs`

use super::text;
use super::{Extractor, LogLayout, Source};
use crate::elements;
use crate::error::Result;
use crate::models::Geometry;
use crate::units;

pub(crate) struct XyzExtractor;

/// 一帧的位置
struct Frame {
    /// 原子数行号
    header: usize,
    /// 原子数
    count: usize,
}

impl Frame {
    fn comment_line(&self) -> usize {
        self.header + 1
    }

    fn atom_lines(&self) -> std::ops::Range<usize> {
        self.header + 2..self.header + 2 + self.count
    }
}

/// 定位全部帧
fn frames(src: Source<'_>) -> Result<Vec<Frame>> {
    let mut frames = Vec::new();
    let mut i = 0;

    while i < src.lines.len() {
        let line = src.lines[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }

        let count: usize = line
            .parse()
            .map_err(|_| src.malformed(i, format!("expected an atom count, found '{}'", line)))?;
        let frame = Frame { header: i, count };

        if frame.atom_lines().end > src.lines.len() {
            return Err(src.malformed(
                i,
                format!("frame declares {} atoms but the file ends early", count),
            ));
        }

        i = frame.atom_lines().end;
        frames.push(frame);
    }

    Ok(frames)
}

fn last_frame(src: Source<'_>) -> Result<Frame> {
    frames(src)?
        .pop()
        .ok_or_else(|| src.missing("xyz coordinate frame"))
}

impl Extractor for XyzExtractor {
    fn layout(&self) -> LogLayout {
        LogLayout::Xyz
    }

    fn number_of_atoms(&self, src: Source<'_>) -> Result<usize> {
        let (i, line) = src
            .lines
            .iter()
            .enumerate()
            .find(|(_, l)| !l.trim().is_empty())
            .ok_or_else(|| src.missing("xyz atom count"))?;
        line.trim()
            .parse()
            .map_err(|_| src.malformed(i, "expected an atom count on the first line"))
    }

    fn geometry(&self, src: Source<'_>) -> Result<Geometry> {
        let frame = last_frame(src)?;
        let mut geometry = Geometry::new();

        for i in frame.atom_lines() {
            let (token, xyz) = text::parse_atom_row(&src.lines[i]).map_err(|r| src.malformed(i, r))?;
            let element = elements::lookup(token)
                .ok_or_else(|| src.malformed(i, format!("unknown element '{}'", token)))?;
            geometry.push(xyz, element.atomic_number, element.mass);
        }

        Ok(geometry)
    }

    /// optim.xyz 注释行中的能量
    fn energy(&self, src: Source<'_>) -> Result<f64> {
        let frame = last_frame(src)?;
        let comment = &src.lines[frame.comment_line()];
        let hartree =
            text::first_number(comment).ok_or_else(|| src.missing("energy in the xyz comment line"))?;
        Ok(units::hartree_to_j_per_mol(hartree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;
    use crate::parsers::fixtures::{self, lines};
    use std::path::PathBuf;

    fn with_source<T>(content: &str, f: impl FnOnce(Source<'_>) -> T) -> T {
        let path = PathBuf::from("coords.xyz");
        let lines = lines(content);
        f(Source::new(&path, &lines))
    }

    #[test]
    fn test_number_of_atoms() {
        let n = with_source(fixtures::ETHANE_XYZ, |s| XyzExtractor.number_of_atoms(s)).unwrap();
        assert_eq!(n, 6);
        let n = with_source(fixtures::FORMALDEHYDE_XYZ, |s| XyzExtractor.number_of_atoms(s)).unwrap();
        assert_eq!(n, 4);
    }

    #[test]
    fn test_geometry_ethane() {
        let g = with_source(fixtures::ETHANE_XYZ, |s| XyzExtractor.geometry(s)).unwrap();
        assert_eq!(g.len(), 6);
        assert_eq!(g.atomic_numbers, vec![6, 6, 1, 1, 1, 1]);
        assert!((g.coordinates[3][1] - (-0.8753068)).abs() < 1e-9);
        assert!((g.masses[2] - 1.00782503).abs() < 1e-7);
        assert_eq!(g.masses[0], 12.0);
    }

    #[test]
    fn test_geometry_scientific_notation() {
        let g = with_source(fixtures::FORMALDEHYDE_XYZ, |s| XyzExtractor.geometry(s)).unwrap();
        assert_eq!(g.atomic_numbers, vec![6, 8, 1, 1]);
        assert!((g.coordinates[0][1] - 4.24348e-5).abs() < 1e-12);
        assert!((g.masses[1] - 15.99491462).abs() < 1e-7);
    }

    #[test]
    fn test_last_frame_wins() {
        let g = with_source(fixtures::FORMALDEHYDE_OPTIM_XYZ, |s| XyzExtractor.geometry(s)).unwrap();
        assert_eq!(g.len(), 4);
        assert!((g.coordinates[0][0] - (-0.0122241)).abs() < 1e-9);

        let e = with_source(fixtures::FORMALDEHYDE_OPTIM_XYZ, |s| XyzExtractor.energy(s)).unwrap();
        assert!((e - units::hartree_to_j_per_mol(-114.5008455547)).abs() < 1e-6);
    }

    #[test]
    fn test_energy_absent_from_plain_comment() {
        let err = with_source(fixtures::ETHANE_XYZ, |s| XyzExtractor.energy(s)).unwrap_err();
        assert!(matches!(err, LogError::MissingBlock { .. }));
    }

    #[test]
    fn test_truncated_frame() {
        let content = "3\ncomment\nO 0.0 0.0 0.0\nH 0.0 0.0 0.96\n";
        let err = with_source(content, |s| XyzExtractor.geometry(s)).unwrap_err();
        assert!(matches!(err, LogError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_bad_atom_row() {
        let content = "2\ncomment\nO 0.0 0.0\nH 0.0 0.0 0.96\n";
        let err = with_source(content, |s| XyzExtractor.geometry(s)).unwrap_err();
        assert!(matches!(err, LogError::Malformed { line: 3, .. }));
    }

    #[test]
    fn test_atomic_number_tokens() {
        let content = "2\n\n8 0.0 0.0 0.0\n1 0.0 0.0 0.96\n";
        let g = with_source(content, |s| XyzExtractor.geometry(s)).unwrap();
        assert_eq!(g.atomic_numbers, vec![8, 1]);
    }
}
