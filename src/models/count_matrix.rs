//! Dense matrix of path counts with overflow-checked arithmetic.

use std::fmt;

/// A `u64` operation exceeded the representable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticOverflow;

impl fmt::Display for ArithmeticOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path count exceeds the 64-bit range")
    }
}

impl std::error::Error for ArithmeticOverflow {}

/// Row-major `rows x cols` matrix of `u64` counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u64>,
}

impl CountMatrix {
    /// Creates a zero matrix.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Creates the `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Creates a matrix from row vectors. All rows must have the same length.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged.
    #[must_use]
    pub fn from_rows(rows: &[Vec<u64>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "CountMatrix rows must all have {cols} columns"
        );
        Self {
            rows: rows.len(),
            cols,
            data: rows.concat(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.data[row * self.cols + col]
    }

    /// Sets the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.data[row * self.cols + col] = value;
    }

    /// Row `row` as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Zeroes column `col` in every row.
    pub fn clear_column(&mut self, col: usize) {
        for row in 0..self.rows {
            self.data[row * self.cols + col] = 0;
        }
    }

    /// True when every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Sum of all entries.
    pub fn total(&self) -> Result<u64, ArithmeticOverflow> {
        self.data
            .iter()
            .try_fold(0u64, |acc, &v| acc.checked_add(v))
            .ok_or(ArithmeticOverflow)
    }

    /// Matrix product `self * other`.
    ///
    /// # Panics
    ///
    /// Panics if `self.cols() != other.rows()`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, ArithmeticOverflow> {
        assert_eq!(
            self.cols, other.rows,
            "cannot multiply {}x{} by {}x{}",
            self.rows, self.cols, other.rows, other.cols
        );
        let mut product = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(i, k);
                if a == 0 {
                    continue;
                }
                for j in 0..other.cols {
                    let b = other.get(k, j);
                    if b == 0 {
                        continue;
                    }
                    let idx = i * other.cols + j;
                    let current = product.data[idx];
                    product.data[idx] = a
                        .checked_mul(b)
                        .and_then(|ab| current.checked_add(ab))
                        .ok_or(ArithmeticOverflow)?;
                }
            }
        }
        Ok(product)
    }

    /// Adds `other` into `self` entrywise.
    ///
    /// # Panics
    ///
    /// Panics if the shapes differ.
    pub fn checked_add_assign(&mut self, other: &Self) -> Result<(), ArithmeticOverflow> {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "cannot add matrices of different shapes"
        );
        for (lhs, &rhs) in self.data.iter_mut().zip(&other.data) {
            *lhs = lhs.checked_add(rhs).ok_or(ArithmeticOverflow)?;
        }
        Ok(())
    }
}
