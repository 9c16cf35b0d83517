//! # 解析器模块
//!
//! 识别 TeraChem 输出文件布局，并按布局分派到对应的提取策略。
//!
//! ## 支持的布局
//! - `Xyz`: 坐标文件 (`*.xyz`，可含多帧，如 `optim.xyz`)
//! - `GeometryTable`: 带质量列的几何表 (`*.geometry`)
//! - `ProgramLog`: 程序主输出（优化、频率、单点、扫描）
//! - `Results`: 仅含最终能量的 `results.dat`
//!
//! ## 依赖关系
//! - 被 `log.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: text, xyz, geometry_table, program_log, results, hessian, frequencies, scan

pub mod frequencies;
pub mod geometry_table;
pub mod hessian;
pub mod program_log;
pub mod results;
pub mod scan;
pub(crate) mod text;
pub mod xyz;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::error::{FormatError, LogError, Result};
use crate::models::{FrequencySet, Geometry, HessianMatrix, ScanSeries};
use serde::Serialize;
use std::path::Path;

/// 文件布局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLayout {
    Xyz,
    GeometryTable,
    ProgramLog,
    Results,
}

impl std::fmt::Display for LogLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLayout::Xyz => write!(f, "xyz coordinate"),
            LogLayout::GeometryTable => write!(f, "geometry table"),
            LogLayout::ProgramLog => write!(f, "TeraChem output"),
            LogLayout::Results => write!(f, "results summary"),
        }
    }
}

impl LogLayout {
    /// 布局对应的提取策略
    pub(crate) fn extractor(self) -> &'static dyn Extractor {
        match self {
            LogLayout::Xyz => &xyz::XyzExtractor,
            LogLayout::GeometryTable => &geometry_table::GeometryTableExtractor,
            LogLayout::ProgramLog => &program_log::ProgramLogExtractor,
            LogLayout::Results => &results::ResultsExtractor,
        }
    }
}

/// 程序主输出的标志行
const PROGRAM_LOG_MARKERS: &[&str] = &[
    "TeraChem",
    "FINAL ENERGY:",
    "****** QM coordinates ******",
    "*** Reference Geometry ***",
    "*** Hessian Matrix",
    "Total atoms:",
    "Scan Cycle",
];

/// 根据后缀和标志行识别布局
pub fn classify(path: &Path, lines: &[String]) -> std::result::Result<LogLayout, FormatError> {
    let format_error = |reason: &str| FormatError {
        path: path.display().to_string(),
        reason: reason.to_string(),
    };

    if lines.iter().all(|l| l.trim().is_empty()) {
        return Err(format_error("file is empty"));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xyz" => return Ok(LogLayout::Xyz),
        "geometry" => return Ok(LogLayout::GeometryTable),
        "dat" => return Ok(LogLayout::Results),
        _ => {}
    }

    if lines.iter().any(|l| geometry_table::is_table_header(l)) {
        return Ok(LogLayout::GeometryTable);
    }
    if lines
        .iter()
        .any(|l| PROGRAM_LOG_MARKERS.iter().any(|m| l.contains(m)))
    {
        return Ok(LogLayout::ProgramLog);
    }
    if lines.iter().any(|l| results::is_energy_label(l)) || results::bare_scalar(lines).is_some() {
        return Ok(LogLayout::Results);
    }

    Err(format_error(
        "no TeraChem output, coordinate or results markers found",
    ))
}

/// 提取操作的输入：文件路径与缓存的行
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub path: &'a Path,
    pub lines: &'a [String],
}

impl<'a> Source<'a> {
    pub fn new(path: &'a Path, lines: &'a [String]) -> Self {
        Source { path, lines }
    }

    pub fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    /// 最后一个包含 `marker` 的行号
    pub fn find_last(&self, marker: &str) -> Option<usize> {
        self.lines.iter().rposition(|l| l.contains(marker))
    }

    /// 第一个包含 `marker` 的行号
    pub fn find_first(&self, marker: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.contains(marker))
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.find_first(marker).is_some()
    }

    pub fn missing(&self, block: &str) -> LogError {
        LogError::missing(block, self.path_str())
    }

    pub fn malformed(&self, line: usize, reason: impl Into<String>) -> LogError {
        LogError::malformed(self.path_str(), line, reason)
    }
}

/// 单一布局的提取策略
///
/// 默认实现表示该布局不提供此信息。
pub(crate) trait Extractor: Sync {
    fn layout(&self) -> LogLayout;

    fn number_of_atoms(&self, src: Source<'_>) -> Result<usize>;

    fn geometry(&self, src: Source<'_>) -> Result<Geometry>;

    fn energy(&self, src: Source<'_>) -> Result<f64>;

    fn force_constants(&self, src: Source<'_>) -> Result<HessianMatrix> {
        Err(self.unsupported(src, "Force constant matrix"))
    }

    fn frequencies(&self, src: Source<'_>) -> Result<FrequencySet> {
        Err(self.unsupported(src, "Vibrational frequencies"))
    }

    fn zero_point_energy(&self, src: Source<'_>) -> Result<f64> {
        Err(self.unsupported(src, "Zero-point energy"))
    }

    fn negative_frequency(&self, src: Source<'_>) -> Result<f64> {
        Err(self.unsupported(src, "Imaginary frequency"))
    }

    fn scan(&self, src: Source<'_>) -> Result<ScanSeries> {
        Err(self.unsupported(src, "PES scan"))
    }

    fn check_for_errors(&self, _src: Source<'_>) -> Result<()> {
        Ok(())
    }

    fn unsupported(&self, src: Source<'_>, operation: &str) -> LogError {
        LogError::Unsupported {
            operation: operation.to_string(),
            layout: self.layout().to_string(),
            path: src.path_str(),
        }
    }
}

/// 按优先级依次尝试各表示，返回第一个成功的结果
///
/// `MissingBlock` 视为"此表示不存在"继续尝试；其他错误保留，
/// 全部失败时优先报告它们。
pub(crate) fn first_success<T>(
    src: Source<'_>,
    what: &str,
    strategies: &[fn(Source<'_>) -> Result<T>],
) -> Result<T> {
    let mut hard_error: Option<LogError> = None;
    for strategy in strategies {
        match strategy(src) {
            Ok(v) => return Ok(v),
            Err(LogError::MissingBlock { .. }) => {}
            Err(e) => {
                tracing::debug!("{} representation rejected: {}", what, e);
                hard_error.get_or_insert(e);
            }
        }
    }
    Err(hard_error.unwrap_or_else(|| src.missing(what)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::fixtures::{self, lines};
    use std::path::PathBuf;

    fn classify_str(name: &str, content: &str) -> std::result::Result<LogLayout, FormatError> {
        classify(&PathBuf::from(name), &lines(content))
    }

    #[test]
    fn test_classify_by_suffix() {
        assert_eq!(
            classify_str("ethane_coords.xyz", fixtures::ETHANE_XYZ).unwrap(),
            LogLayout::Xyz
        );
        assert_eq!(
            classify_str("ethane_output.geometry", fixtures::ETHANE_GEOMETRY).unwrap(),
            LogLayout::GeometryTable
        );
        assert_eq!(
            classify_str("results.dat", fixtures::FORMALDEHYDE_RESULTS_DAT).unwrap(),
            LogLayout::Results
        );
    }

    #[test]
    fn test_classify_by_content() {
        assert_eq!(
            classify_str("output.out", fixtures::FORMALDEHYDE_FREQ_OUT).unwrap(),
            LogLayout::ProgramLog
        );
        assert_eq!(
            classify_str("ethane_minimize.log", fixtures::ETHANE_MINIMIZE_OUT).unwrap(),
            LogLayout::ProgramLog
        );
        assert_eq!(
            classify_str("geom", fixtures::ETHANE_GEOMETRY).unwrap(),
            LogLayout::GeometryTable
        );
        assert_eq!(
            classify_str("energy.txt", "  -114.5008455547\n").unwrap(),
            LogLayout::Results
        );
    }

    #[test]
    fn test_classify_ignores_caller_suffix_for_unknown_content() {
        let err = classify_str("notes.out", "nothing useful here\nat all\n").unwrap_err();
        assert!(err.path.contains("notes.out"));
    }

    #[test]
    fn test_classify_empty_file() {
        let err = classify_str("empty.out", "\n\n").unwrap_err();
        assert!(err.reason.contains("empty"));
    }

    #[test]
    fn test_first_success_prefers_earlier_strategy() {
        let path = PathBuf::from("x.out");
        let content = lines("a\n");
        let src = Source::new(&path, &content);

        fn missing(src: Source<'_>) -> Result<f64> {
            Err(src.missing("first"))
        }
        fn one(_: Source<'_>) -> Result<f64> {
            Ok(1.0)
        }
        fn two(_: Source<'_>) -> Result<f64> {
            Ok(2.0)
        }
        fn broken(src: Source<'_>) -> Result<f64> {
            Err(src.malformed(0, "bad number"))
        }

        assert_eq!(first_success::<f64>(src, "energy", &[missing, one, two]).unwrap(), 1.0);
        assert!(matches!(
            first_success::<f64>(src, "energy", &[missing, broken]),
            Err(LogError::Malformed { .. })
        ));
        assert!(matches!(
            first_success::<f64>(src, "energy", &[missing]),
            Err(LogError::MissingBlock { .. })
        ));
    }
}
