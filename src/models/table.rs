//! # 能量表数据模型
//!
//! 以结构名为键的两张能量表：空能量（每结构一个值）与项能量
//! （每结构一个按文件顺序排列的向量）。两者都记录结构名的首次出现顺序，
//! 保证后续遍历是确定的。
//!
//! ## 依赖关系
//! - 被 `parsers/table.rs` 构建
//! - 被 `bounds/` 读取

use std::collections::HashMap;

/// 空能量表：结构名 -> 参考能量
#[derive(Debug, Clone, Default)]
pub struct EmptyEnergyTable {
    names: Vec<String>,
    values: HashMap<String, f64>,
}

impl EmptyEnergyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个值。重复的结构名覆盖旧值，但保留首次出现的位置。
    pub fn insert(&mut self, name: &str, value: f64) {
        if self.values.insert(name.to_string(), value).is_none() {
            self.names.push(name.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// 首次出现顺序的结构名
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// 项能量表：结构名 -> 按文件顺序追加的能量序列
#[derive(Debug, Clone, Default)]
pub struct TermEnergyTable {
    names: Vec<String>,
    values: HashMap<String, Vec<f64>>,
}

impl TermEnergyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 向结构的能量序列末尾追加一个值
    pub fn push(&mut self, name: &str, value: f64) {
        match self.values.get_mut(name) {
            Some(seq) => seq.push(value),
            None => {
                self.names.push(name.to_string());
                self.values.insert(name.to_string(), vec![value]);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.values.get(name).map(|v| v.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// 按首次出现顺序遍历 (结构名, 能量序列)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(move |n| (n.as_str(), self.values[n].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
