//! # 统一错误处理模块
//!
//! 定义 maxcoef 的所有错误类型，使用 `thiserror` 派生。
//! 所有错误都是致命的：不重试、不输出部分结果之外的内容。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 配置错误（在任何文件 I/O 之前检测）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("exp ({exponents}) and exprn ({powers}) have different lengths")]
    ExponentLengthMismatch { exponents: usize, powers: usize },

    #[error("atoms ({atoms}) and lmax ({lmax}) have different lengths")]
    AtomLengthMismatch { atoms: usize, lmax: usize },

    #[error("Unknown angular momentum symbol: {0}")]
    UnknownAngularMomentum(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidConstant { name: &'static str, value: f64 },
}

/// maxcoef 统一错误类型
#[derive(Error, Debug)]
pub enum MaxcoefError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {source_name}, line {line}\nReason: {reason}")]
    ParseError {
        source_name: String,
        line: usize,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 校验与计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("{name} has {observed} terms but there should be {expected}")]
    TermCountMismatch {
        name: String,
        observed: usize,
        expected: usize,
    },

    #[error(
        "No structure gives a positive slope for term {rank} ({atom} {l} {exponent} {power}); \
         check the calculation coefficient"
    )]
    EmptyCandidateSet {
        rank: usize,
        atom: String,
        l: char,
        exponent: f64,
        power: u32,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MaxcoefError>;
