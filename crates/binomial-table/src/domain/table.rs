//! Precomputed coefficient table
//!
//! A `CoefficientTable` holds C(n, k) for every `0 <= k <= n <= n_max`
//! in triangular layout (see `domain::triangle`). Tables are created by
//! `app::builder::build` and never change afterwards.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::domain::triangle::{contains, row_start, triangle_index};

/// Coefficient table errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Lookup outside the precomputed triangle
    #[error("C({n}, {k}) is out of range: table covers 0 <= k <= n <= {n_max}")]
    OutOfRange { n: u32, k: u32, n_max: u32 },

    /// Requested bound exceeds the range a strategy computes exactly
    #[error("{strategy} is only exact up to n = {limit}, requested n_max = {n_max}")]
    BoundTooLarge {
        strategy: &'static str,
        n_max: u32,
        limit: u32,
    },
}

/// Immutable triangular table of binomial coefficients
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoefficientTable {
    name: &'static str,
    n_max: u32,
    values: Vec<u64>,
    elapsed: Duration,
}

impl CoefficientTable {
    /// Assemble a table from fully populated storage
    ///
    /// `values.len()` must equal `triangle_len(n_max)`.
    pub(crate) fn from_parts(
        name: &'static str,
        n_max: u32,
        values: Vec<u64>,
        elapsed: Duration,
    ) -> Self {
        debug_assert_eq!(values.len(), crate::domain::triangle::triangle_len(n_max));
        Self {
            name,
            n_max,
            values,
            elapsed,
        }
    }

    /// Look up C(n, k)
    pub fn get(&self, n: u32, k: u32) -> Result<u64, TableError> {
        if !contains(self.n_max, n, k) {
            return Err(TableError::OutOfRange {
                n,
                k,
                n_max: self.n_max,
            });
        }
        Ok(self.values[triangle_index(n, k)])
    }

    /// Row n as C(n, 0)..=C(n, n)
    pub fn row(&self, n: u32) -> Result<&[u64], TableError> {
        if n > self.n_max {
            return Err(TableError::OutOfRange {
                n,
                k: 0,
                n_max: self.n_max,
            });
        }
        let start = row_start(n);
        Ok(&self.values[start..start + n as usize + 1])
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[u64])> {
        (0..=self.n_max).map(move |n| {
            let start = row_start(n);
            (n, &self.values[start..start + n as usize + 1])
        })
    }

    /// Strategy name the table was built with
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Upper bound N
    pub fn n_max(&self) -> u32 {
        self.n_max
    }

    /// Build duration
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Build duration in whole milliseconds
    pub fn elapsed_millis(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for CoefficientTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Results:", self.name)?;
        for (n, row) in self.rows() {
            write!(f, "n = {:2}:\t", n)?;
            for (k, value) in row.iter().enumerate() {
                if k > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        write!(f, "{} took {} ms", self.name, self.elapsed_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rows 0..=2 of Pascal's triangle
    fn small_table() -> CoefficientTable {
        CoefficientTable::from_parts(
            "Test",
            2,
            vec![1, 1, 1, 1, 2, 1],
            Duration::from_millis(7),
        )
    }

    #[test]
    fn test_get_in_range() {
        let table = small_table();
        assert_eq!(table.get(0, 0), Ok(1));
        assert_eq!(table.get(2, 1), Ok(2));
        assert_eq!(table.get(2, 2), Ok(1));
    }

    #[test]
    fn test_get_out_of_range() {
        let table = small_table();
        assert_eq!(
            table.get(3, 0),
            Err(TableError::OutOfRange { n: 3, k: 0, n_max: 2 })
        );
        assert_eq!(
            table.get(1, 2),
            Err(TableError::OutOfRange { n: 1, k: 2, n_max: 2 })
        );
    }

    #[test]
    fn test_row() {
        let table = small_table();
        assert_eq!(table.row(2).unwrap(), &[1u64, 2, 1]);
        assert!(table.row(3).is_err());
    }

    #[test]
    fn test_rows_cover_all() {
        let table = small_table();
        let lens: Vec<usize> = table.rows().map(|(_, r)| r.len()).collect();
        assert_eq!(lens, vec![1, 2, 3]);
    }

    #[test]
    fn test_accessors() {
        let table = small_table();
        assert_eq!(table.name(), "Test");
        assert_eq!(table.n_max(), 2);
        assert_eq!(table.elapsed_millis(), 7);
    }

    #[test]
    fn test_display() {
        let text = small_table().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Test Results:",
                "n =  0:\t1",
                "n =  1:\t1\t1",
                "n =  2:\t1\t2\t1",
                "Test took 7 ms",
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        let err = TableError::OutOfRange { n: 31, k: 0, n_max: 30 };
        assert_eq!(
            err.to_string(),
            "C(31, 0) is out of range: table covers 0 <= k <= n <= 30"
        );

        let err = TableError::BoundTooLarge {
            strategy: "Formula",
            n_max: 40,
            limit: 34,
        };
        assert_eq!(
            err.to_string(),
            "Formula is only exact up to n = 34, requested n_max = 40"
        );
    }
}
