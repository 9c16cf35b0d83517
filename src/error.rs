//! # 统一错误处理模块
//!
//! 定义 tclog 的所有错误类型，使用 `thiserror` 派生。
//!
//! - `FormatError`: 文件布局无法识别（分类阶段）
//! - `LogError`: 文件内容无法满足请求的提取操作
//! - `CliError`: 命令行层错误（写文件、CSV、JSON 等）
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 文件布局无法识别
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized TeraChem file layout: {path}\nReason: {reason}")]
pub struct FormatError {
    pub path: String,
    pub reason: String,
}

/// 提取错误
#[derive(Error, Debug)]
pub enum LogError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 布局错误
    // ─────────────────────────────────────────────────────────────
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{operation} is not available from a {layout} file: {path}")]
    Unsupported {
        operation: String,
        layout: String,
        path: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 内容错误
    // ─────────────────────────────────────────────────────────────
    #[error("Could not find {block} in {path}")]
    MissingBlock { block: String, path: String },

    #[error("Malformed content in {path} at line {line}\nReason: {reason}")]
    Malformed {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("TeraChem job in {path} did not complete\nReason: {reason}")]
    JobFailed { path: String, reason: String },
}

impl LogError {
    pub(crate) fn missing(block: impl Into<String>, path: impl Into<String>) -> Self {
        LogError::MissingBlock {
            block: block.into(),
            path: path.into(),
        }
    }

    /// `line` 为 0 起始的行号，报告时转换为 1 起始
    pub(crate) fn malformed(path: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        LogError::Malformed {
            path: path.into(),
            line: line + 1,
            reason: reason.into(),
        }
    }

    pub(crate) fn job_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        LogError::JobFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// 命令行层错误
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Log(#[from] LogError),

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LogError>;
