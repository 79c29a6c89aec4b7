//! # 运行配置
//!
//! 所有可调参数均为编译期常量，集中在不可变的 `Config` 中，
//! 显式传入枚举器、加载器和计算器，不使用全局状态。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 无外部模块依赖

use std::path::PathBuf;

/// 生成项时使用的指数网格
const EXPONENT_GRID: [f64; 29] = [
    0.12, 0.14, 0.16, 0.18, 0.20, 0.22, 0.24, 0.26, 0.28, 0.30, 0.40, 0.50, 0.60, 0.70, 0.80, 0.90,
    1.00, 1.10, 1.20, 1.30, 1.40, 1.50, 1.60, 1.70, 1.80, 1.90, 2.00, 2.50, 3.00,
];

/// 指数网格对应的 r 幂次，每个幂次覆盖整个网格一次
const EXPONENT_POWERS: [u32; 3] = [2, 1, 0];

/// maxcoef 运行配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 空能量文件（每个结构一行）
    pub empty_path: PathBuf,
    /// 项能量文件（每个结构每项一行）
    pub terms_path: PathBuf,
    /// 只保留包含该子串的结构名；None 表示不过滤
    pub filter: Option<String>,
    /// 计算项能量时使用的系数
    pub calc_coefficient: f64,
    /// 允许的最大能量变化
    pub ethr: f64,
    /// 原子标签
    pub atoms: Vec<String>,
    /// 每个原子的最大角动量标签
    pub lmax: Vec<String>,
    /// 指数值
    pub exponents: Vec<f64>,
    /// 指数对应的 r 幂次
    pub powers: Vec<u32>,
    /// 额外写出的 CSV 文件
    pub output_csv: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let exponents = EXPONENT_POWERS
            .iter()
            .flat_map(|_| EXPONENT_GRID.iter().copied())
            .collect();
        let powers = EXPONENT_POWERS
            .iter()
            .flat_map(|&n| std::iter::repeat(n).take(EXPONENT_GRID.len()))
            .collect();

        Config {
            empty_path: PathBuf::from("empty.dat"),
            terms_path: PathBuf::from("terms-merged.dat"),
            filter: Some("eHOMO".to_string()),
            calc_coefficient: 0.001,
            ethr: 0.2,
            atoms: ["H", "C", "N", "O"].iter().map(|s| s.to_string()).collect(),
            lmax: ["d", "f", "f", "f"].iter().map(|s| s.to_string()).collect(),
            exponents,
            powers,
            output_csv: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exponent_lists() {
        let config = Config::default();
        assert_eq!(config.exponents.len(), 87);
        assert_eq!(config.powers.len(), 87);
        assert_eq!(config.powers[0], 2);
        assert_eq!(config.powers[29], 1);
        assert_eq!(config.powers[86], 0);
        assert_eq!(config.exponents[29], 0.12);
        assert_eq!(config.exponents[86], 3.00);
    }
}
