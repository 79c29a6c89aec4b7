//! # 一致性校验
//!
//! 检查项能量表中每个结构的能量个数等于枚举出的项数。
//!
//! ## 依赖关系
//! - 被 `bounds/calculator.rs` 调用
//! - 使用 `models/table.rs`

use crate::error::{MaxcoefError, Result};
use crate::models::TermEnergyTable;

/// 按结构首次出现顺序检查，遇到第一个不一致即报错
pub fn validate_term_counts(terms: &TermEnergyTable, nterm: usize) -> Result<()> {
    for (name, energies) in terms.iter() {
        if energies.len() != nterm {
            return Err(MaxcoefError::TermCountMismatch {
                name: name.to_string(),
                observed: energies.len(),
                expected: nterm,
            });
        }
    }
    Ok(())
}
