//! # CLI 模块
//!
//! 使用 `clap` 定义命令行入口。所有运行参数都是编译期配置
//! （见 `config.rs`），命令行只提供 `--help` 和 `--version`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用

use clap::Parser;

/// maxcoef - 按能量阈值计算每个项的最大系数
#[derive(Parser, Debug)]
#[command(name = "maxcoef")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Compute per-term maximum coefficients from empty and term energies",
    long_about = "Reads the empty-energy and term-energy tables named in the compiled-in \
                  configuration and prints one line per term: atom, angular momentum, \
                  exponent, exponent power and the largest coefficient that keeps every \
                  structure's energy change below the threshold."
)]
pub struct Cli {}
