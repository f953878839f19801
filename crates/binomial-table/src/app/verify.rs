//! Cross-strategy verification
//!
//! Checks every strategy against Pascal's triangle and compares built
//! tables cell by cell.

use rayon::prelude::*;

use crate::app::builder::check_bound;
use crate::domain::strategy::StrategyKind;
use crate::domain::table::{CoefficientTable, TableError};

/// A cell where a strategy disagrees with Pascal's triangle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disagreement {
    pub strategy: &'static str,
    pub n: u32,
    pub k: u32,
    pub expected: u64,
    pub found: u64,
}

/// Result of `verify_strategies`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Number of (strategy, n, k) evaluations performed
    pub checked: u64,
    /// Disagreements sorted by (n, k, strategy order)
    pub disagreements: Vec<Disagreement>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.disagreements.is_empty()
    }
}

/// Rows 0..=n_max of Pascal's triangle by repeated addition
pub fn pascal_triangle(n_max: u32) -> Vec<Vec<u64>> {
    let mut rows: Vec<Vec<u64>> = Vec::with_capacity(n_max as usize + 1);
    rows.push(vec![1]);

    for n in 1..=n_max as usize {
        let prev = &rows[n - 1];
        let mut row = vec![1u64; n + 1];
        for k in 1..n {
            row[k] = prev[k - 1] + prev[k];
        }
        rows.push(row);
    }

    rows
}

/// Evaluate every strategy in `kinds` on every cell up to `n_max`
///
/// Rows are processed in parallel using rayon.
pub fn verify_strategies(n_max: u32, kinds: &[StrategyKind]) -> Result<VerifyReport, TableError> {
    check_bound(kinds, n_max)?;

    let truth = pascal_triangle(n_max);

    let disagreements: Vec<Disagreement> = (0..=n_max)
        .into_par_iter()
        .flat_map_iter(|n| {
            let row = &truth[n as usize];
            (0..=n).flat_map(move |k| {
                let expected = row[k as usize];
                kinds.iter().filter_map(move |kind| {
                    let found = kind.strategy().compute(n, k);
                    (found != expected).then_some(Disagreement {
                        strategy: kind.name(),
                        n,
                        k,
                        expected,
                        found,
                    })
                })
            })
        })
        .collect();

    let cells = (n_max as u64 + 1) * (n_max as u64 + 2) / 2;
    let report = VerifyReport {
        checked: cells * kinds.len() as u64,
        disagreements,
    };

    if report.is_ok() {
        log::info!("{} evaluations agree up to n = {}", report.checked, n_max);
    } else {
        log::warn!(
            "{} disagreements found up to n = {}",
            report.disagreements.len(),
            n_max
        );
    }

    Ok(report)
}

/// Cells (n, k) where two tables differ, over their common rows
pub fn compare_tables(a: &CoefficientTable, b: &CoefficientTable) -> Vec<(u32, u32)> {
    a.rows()
        .zip(b.rows())
        .flat_map(|((n, row_a), (_, row_b))| {
            row_a
                .iter()
                .zip(row_b)
                .enumerate()
                .filter(|(_, (x, y))| x != y)
                .map(move |(k, _)| (n, k as u32))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::builder::build;
    use crate::constants::FORMULA_EXACT_MAX_N;
    use crate::domain::strategy::{DynamicProgramming, Formula};
    use std::time::Duration;

    #[test]
    fn test_pascal_triangle_rows() {
        let rows = pascal_triangle(4);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec![1]);
        assert_eq!(rows[1], vec![1, 1]);
        assert_eq!(rows[4], vec![1, 4, 6, 4, 1]);
    }

    #[test]
    fn test_verify_all_strategies_small() {
        let report = verify_strategies(18, &StrategyKind::ALL).unwrap();
        assert!(report.is_ok(), "{:?}", report.disagreements);
        assert_eq!(report.checked, 19 * 20 / 2 * 3);
    }

    #[test]
    fn test_verify_fast_strategies_to_formula_limit() {
        let kinds = [StrategyKind::DynamicProgramming, StrategyKind::Formula];
        let report = verify_strategies(FORMULA_EXACT_MAX_N, &kinds).unwrap();
        assert!(report.is_ok(), "{:?}", report.disagreements);
    }

    #[test]
    fn test_verify_rejects_bound() {
        let result = verify_strategies(FORMULA_EXACT_MAX_N + 1, &[StrategyKind::Formula]);
        assert!(matches!(result, Err(TableError::BoundTooLarge { .. })));
    }

    #[test]
    fn test_verify_no_strategies() {
        let report = verify_strategies(5, &[]).unwrap();
        assert_eq!(report.checked, 0);
        assert!(report.is_ok());
    }

    #[test]
    fn test_compare_tables_identical() {
        let a = build(&DynamicProgramming, 12).unwrap();
        let b = build(&Formula, 12).unwrap();
        assert!(compare_tables(&a, &b).is_empty());
    }

    #[test]
    fn test_compare_tables_reports_cells() {
        let a = build(&DynamicProgramming, 2).unwrap();
        let b = CoefficientTable::from_parts(
            "Broken",
            2,
            vec![1, 1, 1, 1, 3, 1],
            Duration::ZERO,
        );
        assert_eq!(compare_tables(&a, &b), vec![(2, 1)]);
    }

    #[test]
    fn test_compare_tables_different_bounds() {
        let a = build(&DynamicProgramming, 4).unwrap();
        let b = build(&Formula, 9).unwrap();
        assert!(compare_tables(&a, &b).is_empty());
    }
}
