//! # 文件收集器
//!
//! 根据输入目录和文件名模式收集待提取的 TeraChem 输出文件。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔多个模式）
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/collect.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec![Pattern::new("*").unwrap()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    ///
    /// 无法解析的模式会被忽略并记录警告。
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match Pattern::new(s) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!("Ignoring invalid pattern '{}': {}", s, e);
                    None
                }
            })
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec![Pattern::new("*").unwrap()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件（按路径排序）
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|entry| self.matches_patterns(entry.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        tracing::debug!("Collected {} files under {}", files.len(), self.input.display());
        files
    }

    /// 检查文件名是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}
