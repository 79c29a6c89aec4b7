//! # maxcoef - 按能量阈值限定拟合项系数
//!
//! 对拟合能量模型中的每个基函数项，计算使其对任一结构的能量贡献
//! 不超过阈值的最大系数，供后续的项排序或正则化步骤使用。
//!
//! ## 流程
//! 枚举项 → 读取能量表 → 校验项数 → 计算并输出
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config.rs   (编译期配置)
//!   ├── commands/   (流程执行逻辑)
//!   │     ├── parsers/   (能量表解析器)
//!   │     ├── bounds/    (校验与上限计算)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod bounds;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;
use config::Config;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let _cli = Cli::parse();

    if let Err(e) = commands::run(&Config::default()) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
