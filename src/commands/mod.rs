//! # 命令执行模块
//!
//! 实现计算流程的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `config.rs`, `parsers/`, `bounds/`, `models/`, `utils/`
//! - 子模块: maxcoef

pub mod maxcoef;

use crate::config::Config;
use crate::error::Result;
use std::io;

/// 执行计算，结果行写到标准输出
pub fn run(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    maxcoef::execute(config, &mut out).map(|_| ())
}
