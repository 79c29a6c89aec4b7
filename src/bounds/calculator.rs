//! # 系数上限计算器
//!
//! 对每个项 r 和每个结构 s（按空能量表顺序）：
//! ```text
//! slope = (E_term[s][r] - E_empty[s]) / calc_coefficient
//! slope > SLOPE_FLOOR  =>  candidate = ethr / slope
//! bound(r) = min(candidates)
//! ```
//! 斜率不为正（或低于下限）的结构不贡献候选值；但若某个项完全没有候选值，
//! 则报错而不是默认为 0 或无穷大。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `bounds/validator.rs` 在计算前校验项数
//! - 使用 `models/`

use super::validator::validate_term_counts;
use crate::error::{ConfigurationError, MaxcoefError, Result};
use crate::models::{BoundRow, EmptyEnergyTable, TermEnergyTable, TermIndex, TermSpec};

/// 斜率下限（不含）
pub const SLOPE_FLOOR: f64 = 1e-80;

/// 检查计算系数与能量阈值，在任何 I/O 之前调用
pub fn check_constants(
    calc_coefficient: f64,
    ethr: f64,
) -> std::result::Result<(), ConfigurationError> {
    if !(calc_coefficient.is_finite() && calc_coefficient > 0.0) {
        return Err(ConfigurationError::InvalidConstant {
            name: "calc_coefficient",
            value: calc_coefficient,
        });
    }
    if !(ethr.is_finite() && ethr > 0.0) {
        return Err(ConfigurationError::InvalidConstant {
            name: "ethr",
            value: ethr,
        });
    }
    Ok(())
}

/// 单点有限差分斜率
pub fn slope(term_energy: f64, empty_energy: f64, calc_coefficient: f64) -> f64 {
    (term_energy - empty_energy) / calc_coefficient
}

/// 单个结构给出的候选上限；斜率不超过下限时为 None
pub fn candidate(slope: f64, ethr: f64) -> Option<f64> {
    if slope > SLOPE_FLOOR {
        Some(ethr / slope)
    } else {
        None
    }
}

/// 系数上限计算器
pub struct BoundCalculator<'a> {
    terms: Vec<TermIndex>,
    empty: &'a EmptyEnergyTable,
    energies: &'a TermEnergyTable,
    calc_coefficient: f64,
    ethr: f64,
}

impl<'a> BoundCalculator<'a> {
    /// 创建计算器；项数不一致时直接失败，不计算任何上限
    pub fn new(
        spec: &TermSpec,
        empty: &'a EmptyEnergyTable,
        energies: &'a TermEnergyTable,
        calc_coefficient: f64,
        ethr: f64,
    ) -> Result<Self> {
        check_constants(calc_coefficient, ethr)?;
        validate_term_counts(energies, spec.nterm())?;

        Ok(BoundCalculator {
            terms: spec.terms(),
            empty,
            energies,
            calc_coefficient,
            ethr,
        })
    }

    pub fn terms(&self) -> &[TermIndex] {
        &self.terms
    }

    /// 空能量表中存在、但项能量表中缺失的结构（不贡献任何候选值）
    pub fn missing_structures(&self) -> Vec<&str> {
        self.empty
            .names()
            .iter()
            .filter(|n| !self.energies.contains(n))
            .map(|n| n.as_str())
            .collect()
    }

    /// 计算单个项的上限
    pub fn term_bound(&self, term: &TermIndex) -> Result<f64> {
        let bound = self
            .empty
            .names()
            .iter()
            .filter_map(|name| {
                let empty = self.empty.get(name)?;
                let energy = *self.energies.get(name)?.get(term.rank)?;
                candidate(slope(energy, empty, self.calc_coefficient), self.ethr)
            })
            .fold(None, |min: Option<f64>, c| match min {
                Some(m) if m <= c => Some(m),
                _ => Some(c),
            });

        bound.ok_or_else(|| MaxcoefError::EmptyCandidateSet {
            rank: term.rank,
            atom: term.atom.clone(),
            l: term.l.letter(),
            exponent: term.exponent,
            power: term.power,
        })
    }

    /// 按枚举顺序逐个产生结果行
    pub fn rows(&self) -> impl Iterator<Item = Result<BoundRow>> + '_ {
        self.terms
            .iter()
            .map(move |term| self.term_bound(term).map(|b| BoundRow::new(term, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_term_spec() -> TermSpec {
        TermSpec::new(&["H".to_string()], &["l".to_string()], &[0.5], &[2]).unwrap()
    }

    fn tables(entries: &[(&str, f64, Vec<f64>)]) -> (EmptyEnergyTable, TermEnergyTable) {
        let mut empty = EmptyEnergyTable::new();
        let mut energies = TermEnergyTable::new();
        for (name, e0, terms) in entries {
            empty.insert(name, *e0);
            for t in terms.iter() {
                energies.push(name, *t);
            }
        }
        (empty, energies)
    }

    #[test]
    fn test_single_structure_bound() {
        let spec = single_term_spec();
        let (empty, energies) = tables(&[("A", 1.0, vec![1.0002])]);
        let calc = BoundCalculator::new(&spec, &empty, &energies, 0.001, 0.2).unwrap();

        let rows: Vec<BoundRow> = calc.rows().collect::<Result<_>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert!((rows[0].bound - 1.0).abs() < 1e-9);
        assert_eq!(rows[0].atom, "H");
        assert_eq!(rows[0].l.letter(), 'l');
    }

    #[test]
    fn test_zero_slope_is_empty_candidate_set() {
        let spec = single_term_spec();
        let (empty, energies) = tables(&[("A", 1.0, vec![1.0])]);
        let calc = BoundCalculator::new(&spec, &empty, &energies, 0.001, 0.2).unwrap();

        let err = calc.rows().next().unwrap().unwrap_err();
        assert!(matches!(err, MaxcoefError::EmptyCandidateSet { rank: 0, .. }));
    }

    #[test]
    fn test_negative_slope_excluded_but_positive_kept() {
        let spec = single_term_spec();
        let (empty, energies) = tables(&[("neg", 1.0, vec![0.9]), ("pos", 1.0, vec![1.0004])]);
        let calc = BoundCalculator::new(&spec, &empty, &energies, 0.001, 0.2).unwrap();

        let bound = calc.term_bound(&calc.terms()[0]).unwrap();
        assert!((bound - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_minimum_over_structures() {
        let spec = single_term_spec();
        let (empty, energies) = tables(&[
            ("a", 0.0, vec![0.0002]),
            ("b", 0.0, vec![0.0008]),
            ("c", 0.0, vec![0.0004]),
        ]);
        let calc = BoundCalculator::new(&spec, &empty, &energies, 0.001, 0.2).unwrap();

        // 斜率 0.2, 0.8, 0.4 -> 候选 1.0, 0.25, 0.5
        let bound = calc.term_bound(&calc.terms()[0]).unwrap();
        assert!((bound - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_floor_is_exclusive() {
        assert_eq!(candidate(SLOPE_FLOOR, 0.2), None);
        assert!(candidate(SLOPE_FLOOR * 2.0, 0.2).is_some());
        assert_eq!(candidate(0.0, 0.2), None);
        assert_eq!(candidate(-1.0, 0.2), None);
        assert_eq!(candidate(f64::NAN, 0.2), None);
    }

    #[test]
    fn test_candidate_scales_inversely_with_slope() {
        let base = candidate(0.3, 0.2).unwrap();
        for k in [0.5, 2.0, 10.0] {
            let scaled = candidate(0.3 * k, 0.2).unwrap();
            assert!((scaled - base / k).abs() < 1e-12);
        }
    }

    #[test]
    fn test_structure_missing_from_terms_is_skipped() {
        let spec = single_term_spec();
        let (mut empty, energies) = tables(&[("A", 1.0, vec![1.0002])]);
        empty.insert("B", 5.0);
        let calc = BoundCalculator::new(&spec, &empty, &energies, 0.001, 0.2).unwrap();

        assert_eq!(calc.missing_structures(), vec!["B"]);
        assert!((calc.term_bound(&calc.terms()[0]).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_mismatch_blocks_computation() {
        let spec =
            TermSpec::new(&["H".to_string()], &["l".to_string()], &[0.5, 1.0], &[2, 2]).unwrap();
        let (empty, energies) = tables(&[("A", 1.0, vec![1.1, 1.2, 1.3])]);
        let err = BoundCalculator::new(&spec, &empty, &energies, 0.001, 0.2)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            MaxcoefError::TermCountMismatch {
                observed: 3,
                expected: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_rows_follow_rank_and_stop_at_failure() {
        let spec = TermSpec::new(&["C".to_string()], &["s".to_string()], &[1.0], &[0]).unwrap();
        // rank 0 正斜率，rank 1 零斜率
        let (empty, energies) = tables(&[("A", 0.0, vec![0.0001, 0.0])]);
        let calc = BoundCalculator::new(&spec, &empty, &energies, 0.001, 0.2).unwrap();

        let mut rows = calc.rows();
        let first = rows.next().unwrap().unwrap();
        assert_eq!(first.l.letter(), 'l');
        assert!((first.bound - 2.0).abs() < 1e-9);
        assert!(rows.next().unwrap().is_err());
    }

    #[test]
    fn test_invalid_constants() {
        assert!(check_constants(0.0, 0.2).is_err());
        assert!(check_constants(-0.001, 0.2).is_err());
        assert!(check_constants(0.001, f64::NAN).is_err());
        assert!(check_constants(0.001, 0.2).is_ok());
    }
}
