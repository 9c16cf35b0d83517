//! # 势能面扫描解析器
//!
//! ## 格式说明
//! ```text
//! -=#=-     Scan Cycle     2/4     -=#=-
//! Dihedral 1-2-3-4 = -60.000 deg             # 可选
//! FINAL ENERGY: -155.0290000000 a.u.
//! -=#=- Optimized Energy:    -155.0292000000 a.u.
//! ```
//! 每个 `Scan Cycle` 到下一个之间为一步。能量取该步最后一个
//! `Optimized Energy:`，否则取最后一个 `FINAL ENERGY:`。
//!
//! ## 依赖关系
//! - 被 `parsers/program_log.rs` 使用
//! - 使用 `models/scan.rs`, `units.rs`

use super::program_log::{FINAL_ENERGY, OPTIMIZED_ENERGY};
use super::text;
use super::Source;
use crate::error::Result;
use crate::models::ScanSeries;
use crate::units;
use regex::Regex;
use std::f64::consts::{PI, TAU};
use std::ops::Range;
use std::sync::OnceLock;

/// 第一个点高于最低点超过此值 (J/mol) 时提示存在更低构象
pub const LOWER_CONFORMER_THRESHOLD: f64 = 2000.0;

/// 角度比较容差 (rad)
const ANGLE_EPS: f64 = 1e-6;

fn cycle_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Scan Cycle\s+(\d+)\s*/\s*(\d+)").unwrap())
}

fn dihedral_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Dihedral\s+\S+\s*=\s*([-+]?\d*\.?\d+(?:[eE][-+]?\d+)?)\s*(deg|rad)?").unwrap()
    })
}

/// 扫描中的一步
#[derive(Debug, Clone, PartialEq)]
struct Step {
    /// `Scan Cycle k/N` 中的 k 与 N
    cycle: usize,
    total: usize,
    /// `Scan Cycle` 行号
    line: usize,
    /// 能量 (Hartree)
    energy: f64,
    /// 显式扫描角 (rad)
    angle: Option<f64>,
}

/// 扫描头 `Scan Cycle k/N` 的位置
struct Header {
    line: usize,
    cycle: usize,
    total: usize,
}

/// 各步的扫描头与行范围
fn step_ranges(src: Source<'_>) -> Vec<(Header, Range<usize>)> {
    let headers: Vec<Header> = src
        .lines
        .iter()
        .enumerate()
        .filter_map(|(i, l)| {
            let caps = cycle_regex().captures(l)?;
            Some(Header {
                line: i,
                cycle: caps[1].parse().ok()?,
                total: caps[2].parse().ok()?,
            })
        })
        .collect();

    let ends: Vec<usize> = headers
        .iter()
        .skip(1)
        .map(|h| h.line)
        .chain(std::iter::once(src.lines.len()))
        .collect();

    headers
        .into_iter()
        .zip(ends)
        .map(|(h, end)| {
            let start = h.line;
            (h, start..end)
        })
        .collect()
}

fn step_energy(src: Source<'_>, range: &Range<usize>) -> Option<f64> {
    let last_labelled = |label: &str| {
        src.lines[range.clone()]
            .iter()
            .rev()
            .find(|l| l.contains(label))
            .and_then(|l| text::number_after(l, label))
    };
    last_labelled(OPTIMIZED_ENERGY).or_else(|| last_labelled(FINAL_ENERGY))
}

fn step_angle(src: Source<'_>, range: &Range<usize>) -> Option<f64> {
    src.lines[range.clone()].iter().rev().find_map(|l| {
        let caps = dihedral_regex().captures(l)?;
        let value: f64 = caps[1].parse().ok()?;
        Some(match caps.get(2).map(|m| m.as_str()) {
            Some("rad") => value,
            _ => value.to_radians(),
        })
    })
}

fn collect_steps(src: Source<'_>) -> Result<Vec<Step>> {
    let ranges = step_ranges(src);
    if ranges.is_empty() {
        return Err(src.missing("Scan Cycle headers"));
    }

    let mut steps = Vec::with_capacity(ranges.len());
    for (header, range) in ranges {
        match step_energy(src, &range) {
            Some(energy) => steps.push(Step {
                cycle: header.cycle,
                total: header.total,
                line: header.line,
                energy,
                angle: step_angle(src, &range),
            }),
            None => tracing::warn!(
                "Scan cycle {}/{} in {} has no energy, skipping (line {})",
                header.cycle,
                header.total,
                src.path_str(),
                header.line + 1
            ),
        }
    }
    Ok(steps)
}

/// 由周期号得到等间距角度：第 k/N 步位于 2π(k-1)/N
///
/// 缺失能量的步被跳过后，其余各步仍保持原位置。
fn cycle_angles(src: Source<'_>, steps: &[Step]) -> Result<Vec<f64>> {
    let Some(first) = steps.first() else {
        return Ok(Vec::new());
    };
    if first.cycle != 1 {
        return Err(src.malformed(
            first.line,
            "scan cycle 1 has no energy, the scan cannot be closed",
        ));
    }

    let total = first.total;
    let mut previous = 0;
    let mut angles = Vec::with_capacity(steps.len());
    for step in steps {
        if step.total != total || step.cycle <= previous || step.cycle > total {
            return Err(src.malformed(
                step.line,
                format!(
                    "scan cycle {}/{} does not follow cycle {}/{}",
                    step.cycle, step.total, previous, total
                ),
            ));
        }
        previous = step.cycle;
        angles.push(TAU * (step.cycle - 1) as f64 / total as f64);
    }
    Ok(angles)
}

/// 相对第一个点的角度，按 `direction` (±1) 的转向折叠到 [0, 2π)
fn relative_angles(raw: &[f64], direction: f64) -> Vec<f64> {
    raw.iter()
        .map(|a| (direction * (a - raw[0])).rem_euclid(TAU))
        .collect()
}

/// 扫描转向由第一步的增量决定：折叠到 (π, 2π) 视为减小
fn scan_direction(raw: &[f64]) -> f64 {
    match raw {
        [first, second, ..] if (second - first).rem_euclid(TAU) > PI + ANGLE_EPS => -1.0,
        _ => 1.0,
    }
}

/// 由显式二面角得到 [0, 2π) 内的相对角度
///
/// 终点若回到 0（即第一个点的周期像）则从步列表中取出并返回，
/// 由闭合项代替。二面角减小的扫描按反方向计角。
fn explicit_angles(src: Source<'_>, steps: &mut Vec<Step>) -> Result<(Vec<f64>, Option<Step>)> {
    let mut raw: Vec<f64> = steps.iter().filter_map(|s| s.angle).collect();

    let mut image = None;
    if let Some(&last) = relative_angles(&raw, 1.0).last() {
        let wraps = last < ANGLE_EPS || TAU - last < ANGLE_EPS;
        if raw.len() > 1 && wraps {
            raw.pop();
            image = steps.pop();
            tracing::debug!(
                "Scan cycle {:?} in {} is the periodic image of the first point",
                image.as_ref().map(|s| s.cycle),
                src.path_str()
            );
        }
    }

    let direction = scan_direction(&raw);
    if direction < 0.0 {
        tracing::debug!(
            "Dihedrals in {} decrease, measuring angles in the scan direction",
            src.path_str()
        );
    }

    let angles = relative_angles(&raw, direction);
    if let Some(k) = angles.windows(2).position(|pair| pair[1] - pair[0] <= ANGLE_EPS) {
        return Err(src.malformed(
            steps[k + 1].line,
            format!(
                "scan angles are not ascending ({:.3} deg after {:.3} deg)",
                angles[k + 1].to_degrees(),
                angles[k].to_degrees()
            ),
        ));
    }

    Ok((angles, image))
}

/// 第一个点与最低点之差 (J/mol)，超过阈值时返回
pub fn lower_conformer_gap(energies: &[f64]) -> Option<f64> {
    let first = *energies.first()?;
    let min = energies.iter().copied().fold(f64::INFINITY, f64::min);
    let gap = first - min;
    (gap >= LOWER_CONFORMER_THRESHOLD).then_some(gap)
}

/// 读取扫描能量与角度，首尾闭合
pub fn load_scan_energies(src: Source<'_>) -> Result<ScanSeries> {
    let mut steps = collect_steps(src)?;

    let with_angle = steps.iter().filter(|s| s.angle.is_some()).count();
    let (mut angles, image) = if with_angle == steps.len() && !steps.is_empty() {
        explicit_angles(src, &mut steps)?
    } else {
        if with_angle > 0 {
            tracing::warn!(
                "Only {} of {} scan steps in {} give a dihedral, using even spacing",
                with_angle,
                steps.len(),
                src.path_str()
            );
        }
        (cycle_angles(src, &steps)?, None)
    };

    if steps.len() < 2 {
        return Err(src.missing(&format!(
            "at least 2 scan points with an energy (found {})",
            steps.len()
        )));
    }

    let absolute: Vec<f64> = steps
        .iter()
        .map(|s| units::hartree_to_j_per_mol(s.energy))
        .collect();

    // 周期像不单独成点，但参与最低点的判断
    let mut observed = absolute.clone();
    observed.extend(image.map(|s| units::hartree_to_j_per_mol(s.energy)));

    if let Some(gap) = lower_conformer_gap(&observed) {
        tracing::warn!(
            "First scan point in {} lies {:.2} kJ/mol above the minimum; a lower conformer exists",
            src.path_str(),
            gap / 1000.0
        );
    }

    let min = observed.iter().copied().fold(f64::INFINITY, f64::min);
    let mut energies: Vec<f64> = absolute.iter().map(|e| e - min).collect();

    energies.push(energies[0]);
    angles.push(TAU);

    tracing::debug!("Read {} scan points from {}", steps.len(), src.path_str());
    Ok(ScanSeries { energies, angles })
}
