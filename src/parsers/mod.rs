//! # 解析器模块
//!
//! 提供能量表文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: table

pub mod table;

pub use table::{load_empty_table, load_term_table, NameFilter};
