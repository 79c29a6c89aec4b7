//! # 项索引数据模型
//!
//! 描述拟合模型中的基函数项：(原子, 角动量, 指数, r 幂次)。
//! 项在能量表中没有显式键，只通过枚举顺序中的位置 (rank) 对应。
//!
//! ## 枚举顺序
//! ```text
//! for atom in atoms            (输入顺序)
//!   for l in 0..=lmax(atom)
//!     for (exp, power) in exponents   (输入顺序)
//! ```
//!
//! ## 依赖关系
//! - 被 `bounds/` 和 `commands/` 使用
//! - 使用 `error.rs`

use crate::error::ConfigurationError;
use serde::Serialize;

/// 角动量标签，按整数等级排列。注意 0 对应 `l`，而不是 `s`。
const ANGULAR_LABELS: [char; 7] = ['l', 's', 'p', 'd', 'f', 'g', 'h'];

/// 角动量等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AngularMomentum(u8);

impl AngularMomentum {
    /// 从标签解析（不区分大小写）
    pub fn from_label(label: &str) -> Result<Self, ConfigurationError> {
        let lower = label.trim().to_lowercase();
        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ANGULAR_LABELS
                .iter()
                .position(|&x| x == c)
                .map(|i| AngularMomentum(i as u8))
                .ok_or_else(|| ConfigurationError::UnknownAngularMomentum(label.to_string())),
            _ => Err(ConfigurationError::UnknownAngularMomentum(
                label.to_string(),
            )),
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn letter(self) -> char {
        ANGULAR_LABELS[self.0 as usize]
    }

    /// 从 0 到 self（含）的所有等级
    pub fn up_to(self) -> impl Iterator<Item = AngularMomentum> {
        (0..=self.0).map(AngularMomentum)
    }
}

impl std::fmt::Display for AngularMomentum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Serialize for AngularMomentum {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.letter())
    }
}

/// 原子及其最大角动量
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSpec {
    pub label: String,
    pub lmax: AngularMomentum,
}

/// 指数值和对应的 r 幂次
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponent {
    pub value: f64,
    pub power: u32,
}

/// 一个枚举出的项
#[derive(Debug, Clone, PartialEq)]
pub struct TermIndex {
    /// 从 0 开始的枚举位置
    pub rank: usize,
    pub atom: String,
    pub l: AngularMomentum,
    pub exponent: f64,
    pub power: u32,
}

/// 项的结构化定义
#[derive(Debug, Clone, PartialEq)]
pub struct TermSpec {
    atoms: Vec<AtomSpec>,
    exponents: Vec<Exponent>,
}

impl TermSpec {
    /// 校验并构建项定义，不做任何 I/O
    pub fn new(
        atoms: &[String],
        lmax: &[String],
        exponents: &[f64],
        powers: &[u32],
    ) -> Result<Self, ConfigurationError> {
        if exponents.len() != powers.len() {
            return Err(ConfigurationError::ExponentLengthMismatch {
                exponents: exponents.len(),
                powers: powers.len(),
            });
        }
        if atoms.len() != lmax.len() {
            return Err(ConfigurationError::AtomLengthMismatch {
                atoms: atoms.len(),
                lmax: lmax.len(),
            });
        }

        let atoms = atoms
            .iter()
            .zip(lmax)
            .map(|(label, l)| {
                Ok(AtomSpec {
                    label: label.clone(),
                    lmax: AngularMomentum::from_label(l)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        let exponents = exponents
            .iter()
            .zip(powers)
            .map(|(&value, &power)| Exponent { value, power })
            .collect();

        Ok(TermSpec { atoms, exponents })
    }

    pub fn atoms(&self) -> &[AtomSpec] {
        &self.atoms
    }

    pub fn exponents(&self) -> &[Exponent] {
        &self.exponents
    }

    /// 项总数 Σ (lmax+1) × |exponents|
    pub fn nterm(&self) -> usize {
        self.atoms
            .iter()
            .map(|a| (a.lmax.level() as usize + 1) * self.exponents.len())
            .sum()
    }

    /// 按枚举顺序生成全部项
    pub fn terms(&self) -> Vec<TermIndex> {
        let mut terms = Vec::with_capacity(self.nterm());
        for atom in &self.atoms {
            for l in atom.lmax.up_to() {
                for exp in &self.exponents {
                    terms.push(TermIndex {
                        rank: terms.len(),
                        atom: atom.label.clone(),
                        l,
                        exponent: exp.value,
                        power: exp.power,
                    });
                }
            }
        }
        terms
    }
}
