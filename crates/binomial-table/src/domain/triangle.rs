//! Triangular indexing for C(n, k) storage
//!
//! Rows are laid out back to back in a single flat buffer:
//!
//! ```text
//! n = 0: [0]
//! n = 1: [1, 2]
//! n = 2: [3, 4, 5]
//! ```
//!
//! so row `n` starts at `n(n+1)/2` and holds `n + 1` entries.

/// Offset of the first entry of row `n`
#[inline]
pub fn row_start(n: u32) -> usize {
    let n = n as usize;
    n * (n + 1) / 2
}

/// Flat index of (n, k); the caller guarantees `k <= n`
#[inline]
pub fn triangle_index(n: u32, k: u32) -> usize {
    debug_assert!(k <= n, "k = {} exceeds n = {}", k, n);
    row_start(n) + k as usize
}

/// Number of entries needed for rows 0..=n_max
#[inline]
pub fn triangle_len(n_max: u32) -> usize {
    row_start(n_max) + n_max as usize + 1
}

/// Whether (n, k) lies inside a triangle bounded by `n_max`
#[inline]
pub fn contains(n_max: u32, n: u32, k: u32) -> bool {
    n <= n_max && k <= n
}
