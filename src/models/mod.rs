//! # 数据模型模块
//!
//! 定义项索引、能量表和结果行数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`bounds/` 和 `commands/` 使用
//! - 子模块: term, table, bound

pub mod bound;
pub mod table;
pub mod term;

pub use bound::BoundRow;
pub use table::{EmptyEnergyTable, TermEnergyTable};
pub use term::{TermIndex, TermSpec};
