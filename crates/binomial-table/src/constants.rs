//! Coefficient table constants
//!
//! Note: per-strategy exactness limits are reported through
//! `BinomialStrategy::max_exact_n`, which reads the values defined here.

// =============================================================================
// Table parameters
// =============================================================================

/// Upper bound N used by the display program (rows 0..=30)
pub const MAX_N: u32 = 30;

/// Lookup printed by the display program: C(10, 5)
pub const DEMO_LOOKUP: (u32, u32) = (10, 5);

// =============================================================================
// Exactness limits
// =============================================================================

/// Largest n whose central coefficient C(n, n/2) fits in u64
///
/// C(67, 33) = 14,226,520,737,620,288,370 < 2^64 < C(68, 34)
pub const U64_EXACT_MAX_N: u32 = 67;

/// Largest n whose factorial fits in u128 (34! < 2^128 < 35!)
pub const FORMULA_EXACT_MAX_N: u32 = 34;
