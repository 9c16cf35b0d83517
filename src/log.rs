//! # TeraChem 日志文件
//!
//! `TeraChemLog` 绑定一个文件路径：构造时读入全部行并识别布局，
//! 之后每个提取操作都独立、幂等地重新扫描缓存的行。
//!
//! ## 用法
//! ```no_run
//! use tclog::TeraChemLog;
//!
//! let log = TeraChemLog::new("formaldehyde_freq_output.out")?;
//! let hessian = log.load_force_constant_matrix()?;
//! let (conformer, frequencies) = log.load_conformer()?;
//! # Ok::<(), tclog::LogError>(())
//! ```
//!
//! ## 依赖关系
//! - 使用 `parsers/` 进行布局识别与提取
//! - 被 `models/calculation.rs` 和 `commands/` 使用

use crate::error::{LogError, Result};
use crate::models::{Conformer, Geometry, HessianMatrix, ScanSeries};
use crate::parsers::{self, LogLayout, Source};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// 一个已加载的 TeraChem 输出文件
#[derive(Debug, Clone)]
pub struct TeraChemLog {
    path: PathBuf,
    lines: Vec<String>,
    layout: LogLayout,
}

impl TeraChemLog {
    /// 读取并识别文件
    ///
    /// 非 UTF-8 字节按有损方式替换。
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| LogError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_content(path, &String::from_utf8_lossy(&bytes))
    }

    /// 由内存中的文本构造，路径只用于识别后缀和报告错误
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        let layout = parsers::classify(&path, &lines)?;
        tracing::debug!(
            "Classified {} as {} ({} lines)",
            path.display(),
            layout,
            lines.len()
        );
        Ok(TeraChemLog {
            path,
            lines,
            layout,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> LogLayout {
        self.layout
    }

    fn source(&self) -> Source<'_> {
        Source::new(&self.path, &self.lines)
    }

    /// 原子数
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn get_number_of_atoms(&self) -> Result<usize> {
        self.layout.extractor().number_of_atoms(self.source())
    }

    /// 最后一个坐标块 (Å)
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load_geometry(&self) -> Result<Geometry> {
        let geometry = self.layout.extractor().geometry(self.source())?;
        if geometry.is_empty() {
            return Err(self.source().missing("atoms in the coordinate block"));
        }
        Ok(geometry)
    }

    /// 力常数矩阵 (J/m²)
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load_force_constant_matrix(&self) -> Result<HessianMatrix> {
        self.layout.extractor().force_constants(self.source())
    }

    /// 构象与实振动频率 (cm⁻¹)
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load_conformer(&self) -> Result<(Conformer, Vec<f64>)> {
        let set = self.layout.extractor().frequencies(self.source())?;
        let conformer = Conformer::from_frequencies(&set);
        Ok((conformer, set.frequencies))
    }

    /// 电子能量 (J/mol)
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load_energy(&self) -> Result<f64> {
        self.layout.extractor().energy(self.source())
    }

    /// 零点能 (J/mol)
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load_zero_point_energy(&self) -> Result<f64> {
        self.layout.extractor().zero_point_energy(self.source())
    }

    /// 过渡态虚频 (cm⁻¹，负值)
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load_negative_frequency(&self) -> Result<f64> {
        self.layout.extractor().negative_frequency(self.source())
    }

    /// 势能面扫描
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load_scan_energies(&self) -> Result<ScanSeries> {
        self.layout.extractor().scan(self.source())
    }

    /// 作业是否异常终止
    pub fn check_for_errors(&self) -> Result<()> {
        self.layout.extractor().check_for_errors(self.source())
    }
}
