//! # TeraChem 主输出解析器
//!
//! 覆盖优化、频率、单点和扫描作业的 `output.out`。
//!
//! ## 坐标块
//! ```text
//! ****** QM coordinates ******              # Å
//! C         0.6640965100          0.0039526500          0.0710079300
//!
//!                     *** Reference Geometry ***
//! Atom    X (Bohr)        Y (Bohr)        Z (Bohr)   # 频率作业，Bohr
//!   O     2.261989       -0.114905        0.178317
//! ```
//! 取文件中最后出现的坐标块。
//!
//! ## 能量
//! `FINAL ENERGY: -114.5008455547 a.u.`，否则 `Optimized Energy:`，均取最后一次。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 分派
//! - 使用 `parsers/hessian.rs`, `parsers/frequencies.rs`, `parsers/scan.rs`

use super::text;
use super::{first_success, frequencies, hessian, scan, Extractor, LogLayout, Source};
use crate::elements;
use crate::error::Result;
use crate::models::{FrequencySet, Geometry, HessianMatrix, ScanSeries};
use crate::units;

pub(crate) const QM_COORDINATES: &str = "****** QM coordinates ******";
pub(crate) const REFERENCE_GEOMETRY: &str = "*** Reference Geometry ***";
pub(crate) const TOTAL_ATOMS: &str = "Total atoms:";
pub(crate) const FINAL_ENERGY: &str = "FINAL ENERGY:";
pub(crate) const OPTIMIZED_ENERGY: &str = "Optimized Energy:";

pub(crate) struct ProgramLogExtractor;

/// 坐标长度单位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthUnit {
    Angstrom,
    Bohr,
}

/// 定位到的坐标块
struct CoordinateBlock {
    rows: std::ops::Range<usize>,
    unit: LengthUnit,
}

/// 最后出现的坐标块
fn last_coordinate_block(src: Source<'_>) -> Result<CoordinateBlock> {
    let qm = src.find_last(QM_COORDINATES);
    let reference = src.find_last(REFERENCE_GEOMETRY);

    let (marker, default_unit) = match (qm, reference) {
        (Some(q), Some(r)) if r > q => (r, LengthUnit::Bohr),
        (Some(q), _) => (q, LengthUnit::Angstrom),
        (None, Some(r)) => (r, LengthUnit::Bohr),
        (None, None) => return Err(src.missing("a coordinate block (QM coordinates or Reference Geometry)")),
    };

    let mut start = marker + 1;
    let mut unit = default_unit;

    // 可选的列标题行，如 "Atom    X (Bohr)  ..."
    if let Some(line) = src.lines.get(start) {
        if !line.trim().is_empty() && text::parse_atom_row(line).is_err() {
            let lower = line.to_lowercase();
            if lower.contains("angstrom") {
                unit = LengthUnit::Angstrom;
            } else if lower.contains("bohr") {
                unit = LengthUnit::Bohr;
            }
            start += 1;
        }
    }

    let end = src.lines[start.min(src.lines.len())..]
        .iter()
        .position(|l| text::is_block_end(l))
        .map(|k| start + k)
        .unwrap_or(src.lines.len());

    if end <= start {
        return Err(src.malformed(marker, "coordinate block is empty"));
    }

    Ok(CoordinateBlock {
        rows: start..end,
        unit,
    })
}

fn energy_from_final(src: Source<'_>) -> Result<f64> {
    labelled_energy(src, FINAL_ENERGY)
}

fn energy_from_optimized(src: Source<'_>) -> Result<f64> {
    labelled_energy(src, OPTIMIZED_ENERGY)
}

fn labelled_energy(src: Source<'_>, label: &str) -> Result<f64> {
    let i = src
        .find_last(label)
        .ok_or_else(|| src.missing(label.trim_end_matches(':')))?;
    let hartree = text::number_after(&src.lines[i], label)
        .ok_or_else(|| src.malformed(i, format!("no number after '{}'", label)))?;
    tracing::debug!("{} {} Hartree (line {})", label, hartree, i + 1);
    Ok(units::hartree_to_j_per_mol(hartree))
}

impl Extractor for ProgramLogExtractor {
    fn layout(&self) -> LogLayout {
        LogLayout::ProgramLog
    }

    fn number_of_atoms(&self, src: Source<'_>) -> Result<usize> {
        // "Total atoms:        6"
        if let Some(i) = src.find_first(TOTAL_ATOMS) {
            let n = text::number_after(&src.lines[i], TOTAL_ATOMS)
                .filter(|n| *n >= 1.0 && n.fract() == 0.0)
                .ok_or_else(|| src.malformed(i, "atom count is not a positive integer"))?;
            return Ok(n as usize);
        }
        Ok(last_coordinate_block(src)?.rows.len())
    }

    fn geometry(&self, src: Source<'_>) -> Result<Geometry> {
        let block = last_coordinate_block(src)?;
        let mut geometry = Geometry::new();

        for i in block.rows {
            let (token, xyz) = text::parse_atom_row(&src.lines[i]).map_err(|r| src.malformed(i, r))?;
            let element = elements::lookup(token)
                .ok_or_else(|| src.malformed(i, format!("unknown element '{}'", token)))?;
            geometry.push(xyz, element.atomic_number, element.mass);
        }

        Ok(match block.unit {
            LengthUnit::Angstrom => geometry,
            LengthUnit::Bohr => geometry.scaled(units::BOHR_TO_ANGSTROM),
        })
    }

    fn energy(&self, src: Source<'_>) -> Result<f64> {
        first_success::<f64>(
            src,
            "electronic energy (FINAL ENERGY or Optimized Energy)",
            &[energy_from_final, energy_from_optimized],
        )
    }

    fn force_constants(&self, src: Source<'_>) -> Result<HessianMatrix> {
        let n_atoms = self.number_of_atoms(src)?;
        hessian::load_force_constant_matrix(src, n_atoms)
    }

    fn frequencies(&self, src: Source<'_>) -> Result<FrequencySet> {
        frequencies::load_frequencies(src)
    }

    fn zero_point_energy(&self, src: Source<'_>) -> Result<f64> {
        frequencies::load_zero_point_energy(src)
    }

    fn negative_frequency(&self, src: Source<'_>) -> Result<f64> {
        frequencies::load_negative_frequency(src)
    }

    fn scan(&self, src: Source<'_>) -> Result<ScanSeries> {
        scan::load_scan_energies(src)
    }

    fn check_for_errors(&self, src: Source<'_>) -> Result<()> {
        frequencies::check_for_errors(src)
    }
}
