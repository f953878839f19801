//! Table building workflow
//!
//! This module provides the `build` factory that fills a coefficient table
//! with a given strategy and times the computation.

use std::time::{Duration, Instant};

use crate::domain::strategy::{BinomialStrategy, StrategyKind};
use crate::domain::table::{CoefficientTable, TableError};
use crate::domain::triangle::{triangle_index, triangle_len};

/// Build a coefficient table for rows 0..=n_max
///
/// Only k <= n/2 is computed; the other half is mirrored through
/// C(n, k) = C(n, n - k).
pub fn build<S>(strategy: &S, n_max: u32) -> Result<CoefficientTable, TableError>
where
    S: BinomialStrategy + ?Sized,
{
    build_with_progress(strategy, n_max, |_, _| {})
}

/// Build a coefficient table with progress callback
///
/// `on_progress(current_row, n_max)` is called after each completed row.
/// Time spent in the callback is not counted in the recorded build time.
pub fn build_with_progress<S, F>(
    strategy: &S,
    n_max: u32,
    mut on_progress: F,
) -> Result<CoefficientTable, TableError>
where
    S: BinomialStrategy + ?Sized,
    F: FnMut(u32, u32),
{
    ensure_exact(strategy, n_max)?;

    log::debug!("Building {} table up to n = {}", strategy.name(), n_max);

    let mut values = vec![0u64; triangle_len(n_max)];
    let mut elapsed = Duration::ZERO;

    for n in 0..=n_max {
        let row_start = Instant::now();
        for k in 0..=n / 2 {
            let value = strategy.compute(n, k);
            values[triangle_index(n, k)] = value;
            values[triangle_index(n, n - k)] = value;
        }
        elapsed += row_start.elapsed();

        on_progress(n, n_max);
    }

    log::info!(
        "{} table (n_max = {}) built in {:.3} ms",
        strategy.name(),
        n_max,
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(CoefficientTable::from_parts(
        strategy.name(),
        n_max,
        values,
        elapsed,
    ))
}

/// Build one table per built-in strategy, in `StrategyKind::ALL` order
///
/// Bounds are checked for every strategy before any table is built.
pub fn build_all(n_max: u32) -> Result<Vec<CoefficientTable>, TableError> {
    check_bound(&StrategyKind::ALL, n_max)?;

    StrategyKind::ALL
        .iter()
        .map(|kind| build(kind.strategy(), n_max))
        .collect()
}

/// Fail with `BoundTooLarge` for the first strategy that cannot reach `n_max`
pub fn check_bound(kinds: &[StrategyKind], n_max: u32) -> Result<(), TableError> {
    kinds
        .iter()
        .try_for_each(|kind| ensure_exact(kind.strategy(), n_max))
}

/// Fail with `BoundTooLarge` if `strategy` is not exact up to `n_max`
pub fn ensure_exact<S>(strategy: &S, n_max: u32) -> Result<(), TableError>
where
    S: BinomialStrategy + ?Sized,
{
    let limit = strategy.max_exact_n();
    if n_max > limit {
        return Err(TableError::BoundTooLarge {
            strategy: strategy.name(),
            n_max,
            limit,
        });
    }
    Ok(())
}
