//! Binomial coefficient strategies
//!
//! Three interchangeable ways of computing C(n, k). All of them are pure
//! and must return identical values for every `k <= n <= max_exact_n()`.

use crate::constants::{FORMULA_EXACT_MAX_N, U64_EXACT_MAX_N};

/// Computes C(n, k) given n and k
pub trait BinomialStrategy {
    /// Human readable name used in reports
    fn name(&self) -> &'static str;

    /// Largest n for which `compute` is exact
    fn max_exact_n(&self) -> u32;

    /// Compute C(n, k). Returns 0 when `k > n`.
    ///
    /// Only exact for `n <= max_exact_n()`; beyond that integer overflow
    /// panics in debug builds and wraps in release builds.
    fn compute(&self, n: u32, k: u32) -> u64;
}

/// Naive recursion on Pascal's rule, no memoization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Recursive;

/// Bottom-up Pascal's triangle, rebuilt on every call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DynamicProgramming;

/// Closed form n! / (k! (n-k)!)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Formula;

impl BinomialStrategy for Recursive {
    fn name(&self) -> &'static str {
        "Recursive"
    }

    fn max_exact_n(&self) -> u32 {
        U64_EXACT_MAX_N
    }

    fn compute(&self, n: u32, k: u32) -> u64 {
        binom_recursive(n, k)
    }
}

impl BinomialStrategy for DynamicProgramming {
    fn name(&self) -> &'static str {
        "Dynamic Programming"
    }

    fn max_exact_n(&self) -> u32 {
        U64_EXACT_MAX_N
    }

    fn compute(&self, n: u32, k: u32) -> u64 {
        binom_dp(n, k)
    }
}

impl BinomialStrategy for Formula {
    fn name(&self) -> &'static str {
        "Formula"
    }

    fn max_exact_n(&self) -> u32 {
        FORMULA_EXACT_MAX_N
    }

    fn compute(&self, n: u32, k: u32) -> u64 {
        binom_formula(n, k)
    }
}

/// The closed set of built-in strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Recursive,
    DynamicProgramming,
    Formula,
}

impl StrategyKind {
    /// All strategies in report order
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Recursive,
        StrategyKind::DynamicProgramming,
        StrategyKind::Formula,
    ];

    /// Borrow the strategy implementation for this kind
    pub fn strategy(self) -> &'static dyn BinomialStrategy {
        match self {
            StrategyKind::Recursive => &Recursive,
            StrategyKind::DynamicProgramming => &DynamicProgramming,
            StrategyKind::Formula => &Formula,
        }
    }

    pub fn name(self) -> &'static str {
        self.strategy().name()
    }
}

// =============================================================================
// Algorithms
// =============================================================================

/// C(n, k) by direct recursion
///
/// Exponential in n: C(30, 15) alone takes over 150 million calls.
///
/// # Panics
/// For `n > U64_EXACT_MAX_N` the sums can exceed u64: debug builds panic on
/// the overflow, release builds wrap.
pub fn binom_recursive(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }
    binom_recursive(n - 1, k - 1) + binom_recursive(n - 1, k)
}

/// C(n, k) from a full (n+1) x (k+1) Pascal table
///
/// Overflow past `U64_EXACT_MAX_N` behaves as in `binom_recursive`.
pub fn binom_dp(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    let (n, k) = (n as usize, k as usize);
    let mut dp = vec![vec![0u64; k + 1]; n + 1];

    for i in 0..=n {
        for j in 0..=i.min(k) {
            dp[i][j] = if j == 0 || j == i {
                1
            } else {
                dp[i - 1][j - 1] + dp[i - 1][j]
            };
        }
    }

    dp[n][k]
}

/// C(n, k) = n! / (k! (n-k)!)
///
/// Exact for `n <= FORMULA_EXACT_MAX_N`.
///
/// # Panics
/// Past that bound the factorials overflow u128: debug builds panic on the
/// overflow, release builds wrap and return a wrong value (or panic on
/// division by zero once a wrapped factorial reaches 0).
pub fn binom_formula(n: u32, k: u32) -> u64 {
    if k > n {
        return 0;
    }
    (factorial(n) / (factorial(k) * factorial(n - k))) as u64
}

/// Iterative factorial; overflows u128 for `num > FORMULA_EXACT_MAX_N`
pub fn factorial(num: u32) -> u128 {
    (2..=num as u128).product()
}
