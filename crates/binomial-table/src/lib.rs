//! binomial-table - Precomputed binomial coefficient tables
//!
//! This crate provides functionality to:
//! - Compute C(n, k) with interchangeable strategies (recursive, DP, formula)
//! - Precompute a triangular table of coefficients and time the build
//! - Cross-check every strategy against Pascal's triangle

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use app::builder::{build, build_all, build_with_progress};
pub use constants::*;
pub use domain::strategy::{
    BinomialStrategy, DynamicProgramming, Formula, Recursive, StrategyKind,
};
pub use domain::table::{CoefficientTable, TableError};
