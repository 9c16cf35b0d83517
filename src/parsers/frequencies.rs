//! # 振动频率与零点能解析器
//!
//! ## 频率表
//! ```text
//!              Vibrational Frequencies/Thermochemical Analysis
//! Mode  Eigenvalue(AU)  Frequency(cm-1)  Intensity(km/mol)   Vib.Temp(K)      ZPE(AU)
//!   1     0.0054611345   1198.6352081        4.6891222061  1724.5589114862   0.0027306730
//!   1    -0.0479451123   1523.4512i        ...                                  # 虚频
//! ```
//! 表中只有振动模式（平动、转动已被程序去除）。
//!
//! ## 零点能
//! `Vibrational zero-point energy (ZPE) = 70663.209145369200 J/mol = 0.02691420 AU`
//!
//! ## 依赖关系
//! - 被 `parsers/program_log.rs` 使用
//! - 使用 `models/conformer.rs`, `units.rs`

use super::text;
use super::Source;
use crate::error::{LogError, Result};
use crate::models::FrequencySet;
use crate::units;

/// 作业异常终止的标志
const FATAL_MARKERS: &[&str] = &[
    "DIE called at line",
    "Incorrect molecular charge or spin multiplicity",
    "Hessian diagonalization failed",
];

const COMPLETION_MARKER: &str = "Vibrational Frequencies/Thermochemical Analysis";
const SPIN_MULTIPLICITY: &str = "Spin multiplicity:";
const ZPE_MARKER: &str = "Vibrational zero-point energy (ZPE)";

/// 频率表中的一个模式
#[derive(Debug, Clone, Copy, PartialEq)]
struct Mode {
    /// 波数绝对值 (cm⁻¹)
    wavenumber: f64,
    imaginary: bool,
}

fn is_table_header(line: &str) -> bool {
    line.contains("Eigenvalue(AU)") && line.contains("Frequency(cm-1)")
}

/// 检查作业是否异常终止
pub fn check_for_errors(src: Source<'_>) -> Result<()> {
    for (i, line) in src.lines.iter().enumerate() {
        if let Some(marker) = FATAL_MARKERS.iter().find(|m| line.contains(*m)) {
            tracing::debug!("Fatal marker '{}' at line {}", marker, i + 1);
            return Err(LogError::job_failed(
                src.path_str(),
                format!("line {}: {}", i + 1, line.trim()),
            ));
        }
    }
    Ok(())
}

/// 读取最后一个频率表中的全部模式
fn mode_table(src: Source<'_>) -> Result<Vec<Mode>> {
    check_for_errors(src)?;

    let header = src
        .lines
        .iter()
        .rposition(|l| is_table_header(l))
        .ok_or_else(|| src.missing("vibrational frequency table"))?;

    if !src.lines[..header].iter().any(|l| l.contains(COMPLETION_MARKER)) {
        return Err(LogError::job_failed(
            src.path_str(),
            format!("frequency table without '{}'", COMPLETION_MARKER),
        ));
    }

    let mut modes = Vec::new();
    for (i, line) in src.lines.iter().enumerate().skip(header + 1) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 || parts[0].parse::<usize>().is_err() {
            break;
        }

        let token = parts[2];
        let (digits, imaginary) = match token.strip_suffix('i') {
            Some(d) => (d, true),
            None => (token, false),
        };
        let value: f64 = digits
            .parse()
            .map_err(|_| src.malformed(i, format!("'{}' is not a frequency", token)))?;

        modes.push(Mode {
            wavenumber: value.abs(),
            imaginary,
        });
    }

    if modes.is_empty() {
        return Err(src.malformed(header, "frequency table has no rows"));
    }
    Ok(modes)
}

fn spin_multiplicity(src: Source<'_>) -> Result<u32> {
    let i = src
        .find_first(SPIN_MULTIPLICITY)
        .ok_or_else(|| src.missing("spin multiplicity"))?;
    let m = text::number_after(&src.lines[i], SPIN_MULTIPLICITY)
        .filter(|m| *m >= 1.0 && m.fract() == 0.0)
        .ok_or_else(|| src.malformed(i, "spin multiplicity is not a positive integer"))?;
    Ok(m as u32)
}

/// 实振动频率与自旋多重度
pub fn load_frequencies(src: Source<'_>) -> Result<FrequencySet> {
    let modes = mode_table(src)?;
    let frequencies: Vec<f64> = modes
        .iter()
        .filter(|m| !m.imaginary)
        .map(|m| m.wavenumber)
        .collect();

    if frequencies.is_empty() {
        return Err(LogError::job_failed(
            src.path_str(),
            "frequency table holds only imaginary modes",
        ));
    }

    let skipped = modes.len() - frequencies.len();
    if skipped > 0 {
        tracing::debug!("Skipped {} imaginary mode(s) in {}", skipped, src.path_str());
    }

    Ok(FrequencySet {
        frequencies,
        spin_multiplicity: spin_multiplicity(src)?,
    })
}

/// 过渡态虚频，返回负值 (cm⁻¹)
pub fn load_negative_frequency(src: Source<'_>) -> Result<f64> {
    mode_table(src)?
        .into_iter()
        .find(|m| m.imaginary)
        .map(|m| -m.wavenumber)
        .ok_or_else(|| src.missing("imaginary frequency"))
}

/// 零点能 (J/mol)
///
/// 优先使用程序打印的值，否则由实频按谐振子近似计算。
pub fn load_zero_point_energy(src: Source<'_>) -> Result<f64> {
    check_for_errors(src)?;

    if let Some(i) = src.find_last(ZPE_MARKER) {
        return text::number_before(&src.lines[i], "J/mol")
            .ok_or_else(|| src.malformed(i, "no J/mol value in the ZPE line"));
    }

    let set = load_frequencies(src)?;
    let zpe = units::harmonic_zero_point_energy(&set.frequencies);
    tracing::debug!(
        "No ZPE line in {}, computed {:.3} J/mol from {} modes",
        src.path_str(),
        zpe,
        set.frequencies.len()
    );
    Ok(zpe)
}
