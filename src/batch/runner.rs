//! # 批量执行器
//!
//! 在文件之间并行执行提取任务（单个文件内部不并行）。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，线程数可配置
//! - 进度条显示
//! - 错误收集与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;
use tclog::error::CliError;

use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult<T> {
    /// 处理成功
    Success(T),
    /// 处理失败
    Failed(String, String), // (文件路径, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<T> {
    /// 成功结果
    pub outputs: Vec<T>,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        BatchResult {
            outputs: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult<T>) {
        match result {
            ProcessResult::Success(v) => self.outputs.push(v),
            ProcessResult::Failed(path, err) => self.failures.push((path, err)),
        }
    }

    pub fn success(&self) -> usize {
        self.outputs.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success() + self.failed()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 是否显示进度条
    show_progress: bool,
}

impl BatchRunner {
    /// 创建新的批量执行器，0 表示使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理文件列表，结果保持输入顺序
    pub fn run<T, F>(&self, files: &[PathBuf], processor: F) -> Result<BatchResult<T>, CliError>
    where
        T: Send,
        F: Fn(&PathBuf) -> ProcessResult<T> + Sync + Send,
    {
        let pb = progress::file_progress_bar(files.len() as u64, "Extracting", self.show_progress);

        let failed_count = AtomicUsize::new(0);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| CliError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Vec<ProcessResult<T>> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let result = processor(file);
                    if let ProcessResult::Failed(_, _) = &result {
                        let n = failed_count.fetch_add(1, Ordering::Relaxed) + 1;
                        pb.set_message(format!("Extracting ({} failed)", n));
                    }
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut batch_result = BatchResult::default();
        for result in results {
            batch_result.merge(result);
        }

        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_collects_successes_and_failures() {
        let files: Vec<PathBuf> = (0..8).map(|i| PathBuf::from(format!("{}.out", i))).collect();
        let runner = BatchRunner::new(2).show_progress(false);
        let result = runner
            .run(&files, |f| {
                let stem = f.file_stem().unwrap().to_string_lossy().to_string();
                let n: usize = stem.parse().unwrap();
                if n % 2 == 0 {
                    ProcessResult::Success(n)
                } else {
                    ProcessResult::Failed(f.display().to_string(), "odd".to_string())
                }
            })
            .unwrap();

        assert_eq!(result.total(), 8);
        assert_eq!(result.success(), 4);
        assert_eq!(result.outputs, vec![0, 2, 4, 6]);
        assert_eq!(result.failed(), 4);
    }

    #[test]
    fn test_auto_jobs() {
        assert!(BatchRunner::new(0).jobs() >= 1);
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }
}
