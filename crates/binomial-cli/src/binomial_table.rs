//! Binomial coefficient table CLI
//!
//! Usage: binomial_table
//!
//! Builds C(n, k) for 0 <= k <= n <= 30 with each strategy, prints every
//! table with its build time, then two example lookups.
//! Build progress and logs (RUST_LOG, default: warn) go to stderr.

use binomial_table::app::builder::build_with_progress;
use binomial_table::app::verify::compare_tables;
use binomial_table::constants::{DEMO_LOOKUP, MAX_N};
use binomial_table::{CoefficientTable, StrategyKind, TableError};
use std::io::{self, Write};

fn build_table(kind: StrategyKind) -> Result<CoefficientTable, TableError> {
    let name = kind.name();

    let progress_callback = |current: u32, total: u32| {
        eprint!("\r[{}] Row {}/{}", name, current, total);
        let _ = io::stderr().flush();
    };

    let table = build_with_progress(kind.strategy(), MAX_N, progress_callback)?;
    eprintln!();
    Ok(table)
}

fn run() -> Result<(), TableError> {
    let recursive = build_table(StrategyKind::Recursive)?;
    let dp = build_table(StrategyKind::DynamicProgramming)?;
    let formula = build_table(StrategyKind::Formula)?;

    for table in [&recursive, &dp, &formula] {
        println!("{}", table);
        println!();
    }

    for other in [&recursive, &formula] {
        let mismatches = compare_tables(&dp, other);
        if !mismatches.is_empty() {
            log::warn!(
                "{} disagrees with {} at {} cells, first at {:?}",
                other.name(),
                dp.name(),
                mismatches.len(),
                mismatches[0]
            );
        }
    }

    let (n, k) = DEMO_LOOKUP;
    println!("C({}, {}) using {}: {}", n, k, dp.name(), dp.get(n, k)?);
    println!(
        "Time taken by {}: {} ms",
        formula.name(),
        formula.elapsed_millis()
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
