//! # 系数上限结果行
//!
//! 每个项输出一行：原子 角动量字母 指数 幂次 上限。
//!
//! ## 依赖关系
//! - 被 `bounds/calculator.rs` 生成
//! - 被 `commands/` 输出

use super::term::{AngularMomentum, TermIndex};
use serde::Serialize;

/// 单个项的计算结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundRow {
    pub atom: String,
    pub l: AngularMomentum,
    pub exponent: f64,
    pub power: u32,
    pub bound: f64,
}

impl BoundRow {
    pub fn new(term: &TermIndex, bound: f64) -> Self {
        BoundRow {
            atom: term.atom.clone(),
            l: term.l,
            exponent: term.exponent,
            power: term.power,
            bound,
        }
    }
}

impl std::fmt::Display for BoundRow {
    // `{:?}` 给出最短往返表示，整数值保留 ".0"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {:?} {} {:?}",
            self.atom, self.l, self.exponent, self.power, self.bound
        )
    }
}
