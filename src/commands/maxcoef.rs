//! # 最大系数计算流程
//!
//! 枚举项 → 读取能量表 → 校验项数 → 逐项计算并立即输出。
//!
//! ## 功能
//! - 结果行写到给定输出（通常是标准输出），每算出一行就写出一行
//! - 可选同步写出 CSV
//! - 结束后在标准错误打印按原子汇总的表格
//!
//! ## 依赖关系
//! - 使用 `config.rs`
//! - 使用 `models/`, `parsers/table.rs`, `bounds/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::bounds::{check_constants, BoundCalculator};
use crate::config::Config;
use crate::error::{MaxcoefError, Result};
use crate::models::{BoundRow, TermSpec};
use crate::parsers::{load_empty_table, load_term_table, NameFilter};
use crate::utils::{output, progress};

use std::fs::File;
use std::io::Write;
use tabled::{Table, Tabled};

/// 按原子汇总的结果行
#[derive(Debug, Clone, Tabled)]
pub struct AtomSummary {
    #[tabled(rename = "Atom")]
    pub atom: String,
    #[tabled(rename = "Terms")]
    pub terms: usize,
    #[tabled(rename = "Min bound")]
    pub min_bound: f64,
    #[tabled(rename = "Max bound")]
    pub max_bound: f64,
}

impl AtomSummary {
    fn new(row: &BoundRow) -> Self {
        AtomSummary {
            atom: row.atom.clone(),
            terms: 1,
            min_bound: row.bound,
            max_bound: row.bound,
        }
    }

    fn record(&mut self, row: &BoundRow) {
        self.terms += 1;
        self.min_bound = self.min_bound.min(row.bound);
        self.max_bound = self.max_bound.max(row.bound);
    }
}

/// 执行完整流程，结果行写入 `out`
pub fn execute<W: Write>(config: &Config, out: &mut W) -> Result<Vec<AtomSummary>> {
    output::print_header("Computing Maximum Coefficients");

    // 配置检查在任何 I/O 之前完成
    let spec = TermSpec::new(&config.atoms, &config.lmax, &config.exponents, &config.powers)?;
    check_constants(config.calc_coefficient, config.ethr)?;
    output::print_info(&format!(
        "{} terms ({} atoms, {} exponents)",
        spec.nterm(),
        spec.atoms().len(),
        spec.exponents().len()
    ));

    let filter = NameFilter::new(config.filter.as_deref());
    let pb = progress::create_spinner("Reading energy tables");
    let loaded = load_empty_table(&config.empty_path, &filter).and_then(|empty| {
        load_term_table(&config.terms_path, &filter).map(|energies| (empty, energies))
    });
    pb.finish_and_clear();
    let (empty, energies) = loaded?;

    output::print_info(&format!(
        "Read {} structures from '{}' and {} from '{}'",
        empty.len(),
        config.empty_path.display(),
        energies.len(),
        config.terms_path.display()
    ));
    if empty.is_empty() {
        output::print_warning("No structures passed the name filter.");
    }

    let calculator = BoundCalculator::new(
        &spec,
        &empty,
        &energies,
        config.calc_coefficient,
        config.ethr,
    )?;

    for name in calculator.missing_structures() {
        output::print_warning(&format!("{} has no term energies; skipped", name));
    }

    let mut csv_writer = match &config.output_csv {
        Some(path) => {
            let file = File::create(path).map_err(|e| MaxcoefError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            Some(csv::Writer::from_writer(file))
        }
        None => None,
    };

    let mut summary: Vec<AtomSummary> = Vec::new();
    for row in calculator.rows() {
        let row = row?;

        writeln!(out, "{}", row).map_err(|e| MaxcoefError::FileWriteError {
            path: "<stdout>".to_string(),
            source: e,
        })?;

        if let Some(wtr) = csv_writer.as_mut() {
            wtr.serialize(&row)?;
        }

        // 同一原子的项在枚举中是连续的
        match summary.last_mut() {
            Some(last) if last.atom == row.atom => last.record(&row),
            _ => summary.push(AtomSummary::new(&row)),
        }
    }

    out.flush().map_err(|e| MaxcoefError::FileWriteError {
        path: "<stdout>".to_string(),
        source: e,
    })?;

    if let (Some(mut wtr), Some(path)) = (csv_writer, &config.output_csv) {
        wtr.flush().map_err(|e| MaxcoefError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        output::print_success(&format!("Bounds saved to '{}'", path.display()));
    }

    eprintln!("{}", Table::new(&summary));
    output::print_done(&format!("Computed bounds for {} terms", spec.nterm()));

    Ok(summary)
}
