//! # 系数上限模块
//!
//! 校验项能量表并计算每个项的最大系数。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/`
//! - 子模块: validator, calculator

pub mod calculator;
pub mod validator;

pub use calculator::{check_constants, BoundCalculator};
