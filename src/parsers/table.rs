//! # 两列能量表解析器
//!
//! 解析空能量和项能量两种文本表。
//!
//! ## 格式说明
//! ```text
//! <structure-name> <value>
//! <structure-name> <value>
//! ...
//! ```
//! 无表头，空白分隔，每行恰好两列。空能量表每结构一行；项能量表每个
//! (结构, 项) 一行，按项的枚举顺序排列。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/table.rs`

use crate::error::{MaxcoefError, Result};
use crate::models::{EmptyEnergyTable, TermEnergyTable};
use std::fs;
use std::path::Path;

/// 结构名过滤器
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    contains: Option<String>,
}

impl NameFilter {
    pub fn new(contains: Option<&str>) -> Self {
        NameFilter {
            contains: contains.map(|s| s.to_string()),
        }
    }

    pub fn accepts(&self, name: &str) -> bool {
        match &self.contains {
            Some(sub) => name.contains(sub.as_str()),
            None => true,
        }
    }
}

/// 从文件加载空能量表
pub fn load_empty_table(path: &Path, filter: &NameFilter) -> Result<EmptyEnergyTable> {
    let content = read_table_file(path)?;
    parse_empty_table(&content, &path.display().to_string(), filter)
}

/// 从文件加载项能量表
pub fn load_term_table(path: &Path, filter: &NameFilter) -> Result<TermEnergyTable> {
    let content = read_table_file(path)?;
    parse_term_table(&content, &path.display().to_string(), filter)
}

/// 从字符串内容解析空能量表
pub fn parse_empty_table(
    content: &str,
    source_name: &str,
    filter: &NameFilter,
) -> Result<EmptyEnergyTable> {
    let mut table = EmptyEnergyTable::new();
    for_each_row(content, source_name, filter, |name, value| {
        table.insert(name, value)
    })?;
    Ok(table)
}

/// 从字符串内容解析项能量表
pub fn parse_term_table(
    content: &str,
    source_name: &str,
    filter: &NameFilter,
) -> Result<TermEnergyTable> {
    let mut table = TermEnergyTable::new();
    for_each_row(content, source_name, filter, |name, value| {
        table.push(name, value)
    })?;
    Ok(table)
}

fn read_table_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| MaxcoefError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 逐行解析，对通过过滤的行调用 `sink`
///
/// 列数检查作用于每一行；数值只在行通过过滤后才解析。
fn for_each_row<F>(
    content: &str,
    source_name: &str,
    filter: &NameFilter,
    mut sink: F,
) -> Result<()>
where
    F: FnMut(&str, f64),
{
    for (i, line) in content.lines().enumerate() {
        let parse_error = |reason: String| MaxcoefError::ParseError {
            source_name: source_name.to_string(),
            line: i + 1,
            reason,
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(parse_error(format!(
                "expected 2 fields, found {}",
                parts.len()
            )));
        }

        let name = parts[0];
        if !filter.accepts(name) {
            continue;
        }

        let value: f64 = parts[1]
            .parse()
            .map_err(|_| parse_error(format!("invalid number '{}'", parts[1])))?;
        sink(name, value);
    }
    Ok(())
}
