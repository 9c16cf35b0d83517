//! # 力常数矩阵 (Hessian) 解析器
//!
//! TeraChem 将 3N×3N Hessian 按列分块打印，每块最多 6 列：
//! ```text
//! *** Hessian Matrix (Hartree/Bohr^2) ***
//!               1              2              3              4              5              6
//!    1   0.5878000000   0.0216750000   0.0009750000  -0.0114000000   0.0141250000   0.0188500000
//!    ...
//!   12   ...
//!
//!               7              8              9             10             11             12
//!    1  -0.0037000000   ...
//! ```
//! 两遍组装：先由原子数确定 3N 并分配零矩阵，再逐块读取列号表头，
//! 将每一行写入绝对 (行, 列) 位置。任何分块不完整都视为错误。
//!
//! ## 依赖关系
//! - 被 `parsers/program_log.rs` 使用
//! - 使用 `models/hessian.rs`, `units.rs`

use super::Source;
use crate::error::Result;
use crate::models::HessianMatrix;
use crate::units;
use regex::Regex;
use std::sync::OnceLock;

pub(crate) const HESSIAN_MARKER: &str = "*** Hessian Matrix (Hartree/Bohr^2) ***";

/// 非对称性超过此相对容差时给出警告
const SYMMETRY_TOLERANCE: f64 = 1e-6;

fn column_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\s*\d+)+\s*$").unwrap())
}

/// 解析列号表头，返回 0 起始的列号
fn parse_column_header(line: &str) -> Option<Vec<usize>> {
    if !column_header_regex().is_match(line) {
        return None;
    }
    line.split_whitespace()
        .map(|t| t.parse::<usize>().ok().and_then(|c| c.checked_sub(1)))
        .collect()
}

/// 逐行读取器，跳过空行
struct Cursor<'a> {
    src: Source<'a>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn next_nonblank(&mut self) -> Option<(usize, &'a str)> {
        let lines: &'a [String] = self.src.lines;
        while self.pos < lines.len() {
            let i = self.pos;
            self.pos += 1;
            let line = lines[i].as_str();
            if !line.trim().is_empty() {
                return Some((i, line));
            }
        }
        None
    }

    fn peek_nonblank(&self) -> Option<(usize, &'a str)> {
        let lines: &'a [String] = self.src.lines;
        lines[self.pos.min(lines.len())..]
            .iter()
            .enumerate()
            .find(|(_, l)| !l.trim().is_empty())
            .map(|(k, l)| (self.pos + k, l.as_str()))
    }
}

/// 读取最后一个 Hessian 块，返回 J/m² 单位的 3N×3N 矩阵
pub fn load_force_constant_matrix(src: Source<'_>, n_atoms: usize) -> Result<HessianMatrix> {
    let marker = src
        .find_last(HESSIAN_MARKER)
        .ok_or_else(|| src.missing("Hessian matrix block"))?;

    // 第一遍：确定维度，分配零矩阵
    let dim = 3 * n_atoms;
    if dim == 0 {
        return Err(src.malformed(marker, "cannot size a Hessian for zero atoms"));
    }
    let mut hessian = HessianMatrix::zeros(dim);
    let mut covered = vec![false; dim];
    let mut filled = 0;

    // 第二遍：按分块写入绝对位置
    let mut cursor = Cursor {
        src,
        pos: marker + 1,
    };

    while filled < dim {
        let (hi, header) = cursor.next_nonblank().ok_or_else(|| {
            src.malformed(
                marker,
                format!("Hessian block ends after {} of {} columns", filled, dim),
            )
        })?;

        let columns = parse_column_header(header).ok_or_else(|| {
            src.malformed(
                hi,
                format!(
                    "expected a column index header, found '{}' ({} of {} columns read)",
                    header.trim(),
                    filled,
                    dim
                ),
            )
        })?;

        for &c in &columns {
            if c >= dim {
                return Err(src.malformed(
                    hi,
                    format!("column {} exceeds the Hessian dimension {}", c + 1, dim),
                ));
            }
            if covered[c] {
                return Err(src.malformed(hi, format!("column {} appears twice", c + 1)));
            }
        }

        for row in 0..dim {
            let (ri, line) = cursor.next_nonblank().ok_or_else(|| {
                src.malformed(
                    hi,
                    format!("chunk ends after {} of {} rows", row, dim),
                )
            })?;

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parse_column_header(line).is_some() || parts.len() != columns.len() + 1 {
                return Err(src.malformed(
                    ri,
                    format!(
                        "chunk has {} rows but the Hessian needs {} (3 x {} atoms)",
                        row, dim, n_atoms
                    ),
                ));
            }

            match parts[0].parse::<usize>() {
                Ok(index) if index == row + 1 => {}
                _ => {
                    return Err(src.malformed(
                        ri,
                        format!("expected row {}, found '{}'", row + 1, parts[0]),
                    ))
                }
            }

            for (&c, token) in columns.iter().zip(&parts[1..]) {
                let value: f64 = token
                    .parse()
                    .map_err(|_| src.malformed(ri, format!("'{}' is not a number", token)))?;
                hessian.set(row, c, value);
            }
        }

        // 分块行数多于 3N
        if let Some((xi, extra)) = cursor.peek_nonblank() {
            let parts: Vec<&str> = extra.split_whitespace().collect();
            let looks_like_row = parse_column_header(extra).is_none()
                && parts.len() == columns.len() + 1
                && parts[0].parse::<usize>().is_ok()
                && parts[1..].iter().all(|t| t.parse::<f64>().is_ok());
            if looks_like_row {
                return Err(src.malformed(
                    xi,
                    format!("chunk has more than {} rows (3 x {} atoms)", dim, n_atoms),
                ));
            }
        }

        for &c in &columns {
            covered[c] = true;
        }
        filled += columns.len();
        tracing::trace!("Hessian chunk at line {} filled columns {:?}", hi + 1, columns);
    }

    hessian.scale(units::hartree_per_bohr2_to_si(1.0));

    if !hessian.is_symmetric(SYMMETRY_TOLERANCE) {
        tracing::warn!(
            "Hessian in {} is not symmetric (max |H_ij - H_ji| = {:.3e} J/m^2)",
            src.path_str(),
            hessian.max_asymmetry()
        );
    }

    tracing::debug!("Read {}x{} Hessian from {}", dim, dim, src.path_str());
    Ok(hessian)
}
