//! Dense row-major matrix storage.
//!
//! ## Purpose
//!
//! This module provides `Matrix<T>`, the owned value every operation consumes
//! and produces, and `Shape`, its `(rows, cols)` metadata. A matrix is a single
//! contiguous buffer paired with its shape; the buffer alone is meaningless.
//!
//! ## Design notes
//!
//! * **Row-major**: Element `(i, j)` lives at index `i * cols + j`.
//! * **Validated construction**: Public constructors reject zero dimensions,
//!   element counts that overflow `usize`, and buffers whose length is not
//!   `rows * cols`.
//! * **Owned results**: Operations return fresh matrices; nothing aliases
//!   the inputs.
//!
//! ## Invariants
//!
//! * `rows > 0` and `cols > 0`.
//! * `data.len() == rows * cols`.
//!
//! ## Non-goals
//!
//! * This module does not store sparse or strided layouts.
//! * This module does not parse text or read files.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt;
use core::ops::Index;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MatrixError;

// ============================================================================
// Shape
// ============================================================================

/// Dimension pair of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// Create a shape from a row and column count.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of elements a buffer of this shape holds, saturating at
    /// `usize::MAX`. Use [`Shape::checked_len`] before allocating.
    #[inline]
    pub const fn len(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Whether either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether rows equal cols.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element count of a valid shape.
    ///
    /// Fails with `EmptyDimension` if either dimension is zero and with
    /// `DimensionOverflow` if `rows * cols` does not fit in `usize`.
    pub fn checked_len(&self) -> Result<usize, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.rows
            .checked_mul(self.cols)
            .ok_or(MatrixError::DimensionOverflow {
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Check that this shape can describe a buffer of `len` values.
    pub fn check_buffer(&self, len: usize) -> Result<(), MatrixError> {
        if self.checked_len()? != len {
            return Err(MatrixError::BufferLengthMismatch {
                rows: self.rows,
                cols: self.cols,
                len,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// A dense `rows x cols` matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Wrap a buffer whose shape has already been checked.
    #[inline]
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as a `Shape`.
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Whether rows equal cols.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements (never true once constructed).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Borrow row `i`, or `None` if out of range.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        if i >= self.rows {
            return None;
        }
        let start = i * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Iterate over rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }
}

impl<T: Float> Matrix<T> {
    /// Create a matrix from a row-major buffer.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        Shape::new(rows, cols).check_buffer(data.len())?;
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix by copying a row-major slice.
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self, MatrixError> {
        Shape::new(rows, cols).check_buffer(data.len())?;
        Ok(Self {
            data: data.to_vec(),
            rows,
            cols,
        })
    }

    /// Create a matrix from a list of equally sized rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::EmptyDimension {
                rows: n_rows,
                cols: n_cols,
            });
        }

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Create a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = Shape::new(rows, cols).checked_len()?;
        Ok(Self {
            data: vec![T::zero(); len],
            rows,
            cols,
        })
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Element `(i, j)`, or `None` if out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Whether `other` has the same shape and every element differs by at
    /// most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of range for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, v)?,
                    None => write!(f, "{}", v)?,
                }
            }
        }
        Ok(())
    }
}
