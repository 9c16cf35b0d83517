//! # 计算结果汇总模型
//!
//! 汇总单个 TeraChem 文件中能提取到的全部标量信息，供 `inspect`、`collect` 输出。
//!
//! ## 依赖关系
//! - 被 `commands/inspect.rs`, `commands/collect.rs` 使用
//! - 使用 `log.rs` 进行提取

use crate::log::TeraChemLog;
use crate::parsers::LogLayout;
use serde::Serialize;

/// 单个文件的提取汇总
///
/// 每一项都独立提取；失败的项为 `None`，原因记录在 `failures` 中。
#[derive(Debug, Clone, Serialize)]
pub struct LogSummary {
    /// 文件路径
    pub path: String,

    /// 识别出的布局
    pub layout: LogLayout,

    /// 原子数
    pub num_atoms: Option<usize>,

    /// 化学式
    pub formula: Option<String>,

    /// 电子能量 (J/mol)
    pub energy_j_per_mol: Option<f64>,

    /// 零点能 (J/mol)
    pub zpe_j_per_mol: Option<f64>,

    /// 自旋多重度
    pub spin_multiplicity: Option<u32>,

    /// 实振动频率数
    pub num_frequencies: Option<usize>,

    /// 虚频 (cm⁻¹，负值)
    pub negative_frequency: Option<f64>,

    /// Hessian 维度 (3N)
    pub hessian_dim: Option<usize>,

    /// 扫描点数（含闭合点）
    pub scan_points: Option<usize>,

    /// (项目, 原因)
    pub failures: Vec<(String, String)>,
}

impl LogSummary {
    /// 对一个已加载的日志执行全部提取
    pub fn collect(log: &TeraChemLog) -> Self {
        let mut failures = Vec::new();

        macro_rules! attempt {
            ($name:literal, $expr:expr) => {
                match $expr {
                    Ok(v) => Some(v),
                    Err(e) => {
                        failures.push(($name.to_string(), e.to_string()));
                        None
                    }
                }
            };
        }

        let num_atoms = attempt!("atoms", log.get_number_of_atoms());
        let formula = attempt!("geometry", log.load_geometry().map(|g| g.formula()));
        let energy = attempt!("energy", log.load_energy());
        let zpe = attempt!("zpe", log.load_zero_point_energy());
        let conformer = attempt!("frequencies", log.load_conformer());
        let negative_frequency = attempt!("negative frequency", log.load_negative_frequency());
        let hessian_dim = attempt!("hessian", log.load_force_constant_matrix().map(|h| h.dim()));
        let scan_points = attempt!("scan", log.load_scan_energies().map(|s| s.len()));

        LogSummary {
            path: log.path().display().to_string(),
            layout: log.layout(),
            num_atoms,
            formula,
            energy_j_per_mol: energy,
            zpe_j_per_mol: zpe,
            spin_multiplicity: conformer.as_ref().map(|(c, _)| c.spin_multiplicity),
            num_frequencies: conformer.as_ref().map(|(_, f)| f.len()),
            negative_frequency,
            hessian_dim,
            scan_points,
            failures,
        }
    }
}

/// 批量提取的能量记录（CSV 行）
#[derive(Debug, Clone, Serialize)]
pub struct EnergyRecord {
    pub rank: usize,
    pub file: String,
    pub layout: String,
    pub energy_j_per_mol: f64,
    pub relative_kj_per_mol: f64,
}

impl EnergyRecord {
    /// 按能量升序排名，相对能量以最低者为零
    pub fn rank(mut entries: Vec<(String, String, f64)>) -> Vec<EnergyRecord> {
        entries.sort_by(|a, b| a.2.total_cmp(&b.2).then_with(|| a.0.cmp(&b.0)));
        let min = entries.first().map(|e| e.2).unwrap_or(0.0);

        entries
            .into_iter()
            .enumerate()
            .map(|(i, (file, layout, energy))| EnergyRecord {
                rank: i + 1,
                file,
                layout,
                energy_j_per_mol: energy,
                relative_kj_per_mol: (energy - min) / 1000.0,
            })
            .collect()
    }
}
