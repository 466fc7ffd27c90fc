//! Conversions between `Matrix` and `nalgebra::DMatrix`.
//!
//! ## Purpose
//!
//! Results produced by this crate can be handed to nalgebra for operations
//! it does not provide (decompositions, norms), and nalgebra matrices can be
//! brought back in. nalgebra stores column-major; `Matrix` stores row-major,
//! so both directions reorder elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MatrixError;
use crate::primitives::matrix::{Matrix, Shape};

impl<T: Float + Scalar> Matrix<T> {
    /// Copy into a column-major `nalgebra::DMatrix`.
    pub fn to_dmatrix(&self) -> DMatrix<T> {
        DMatrix::from_row_slice(self.rows(), self.cols(), self.as_slice())
    }

    /// Copy out of an `nalgebra::DMatrix`.
    pub fn from_dmatrix(m: &DMatrix<T>) -> Result<Self, MatrixError> {
        let (rows, cols) = m.shape();
        let shape = Shape::new(rows, cols);
        if shape.is_empty() {
            return Err(MatrixError::EmptyDimension { rows, cols });
        }

        let mut data = Vec::with_capacity(shape.len());
        for i in 0..rows {
            for j in 0..cols {
                data.push(m[(i, j)]);
            }
        }
        Ok(Matrix::from_parts(rows, cols, data))
    }
}
