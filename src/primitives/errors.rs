//! Error types for matrix operations.
//!
//! ## Purpose
//!
//! This module defines `MatrixError`, the single error type returned by every
//! fallible operation in the crate: matrix construction, engine configuration,
//! and the arithmetic operations themselves.
//!
//! ## Design notes
//!
//! * **Terminal**: Every variant ends the call that raised it. No operation
//!   returns a partially filled buffer alongside an error.
//! * **Descriptive**: Variants carry the shapes, indices, or values needed to
//!   produce a useful message without access to the inputs.
//! * **no_std**: `Display` is implemented against `core::fmt`; the
//!   `std::error::Error` impl is only compiled with the `std` feature.
//!
//! ## Key concepts
//!
//! * **Shape errors**: `DimensionMismatch`, `EmptyDimension`,
//!   `DimensionOverflow`, `BufferLengthMismatch`, `RaggedRows`.
//! * **Numerical errors**: `SingularMatrix`, `InvalidNumericValue`.
//! * **Configuration errors**: `InvalidTolerance`, `DuplicateParameter`,
//!   `UnknownOperator`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// Internal dependencies
use crate::primitives::matrix::Shape;

// ============================================================================
// MatrixError
// ============================================================================

/// Errors raised by matrix construction, configuration, and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Operand shapes do not satisfy the operation's precondition.
    DimensionMismatch {
        /// Name of the operation that rejected the operands.
        operation: &'static str,
        /// Shape of the left-hand (or only) operand.
        lhs: Shape,
        /// Shape of the right-hand operand (equal to `lhs` for unary operations).
        rhs: Shape,
    },

    /// No usable pivot was found while eliminating a column.
    SingularMatrix {
        /// Column being eliminated when the pivot search failed.
        column: usize,
        /// Largest absolute value found in the column.
        pivot: f64,
    },

    /// A dimension was zero.
    EmptyDimension {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// `rows * cols` does not fit in `usize`.
    DimensionOverflow {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Buffer length does not equal `rows * cols`.
    BufferLengthMismatch {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// A row passed to `Matrix::from_rows` had the wrong length.
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// An input value was NaN or infinite.
    InvalidNumericValue(String),

    /// Pivot tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// An operator name could not be parsed.
    UnknownOperator(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                operation,
                lhs,
                rhs,
            } => write!(
                f,
                "Dimension mismatch in {}: left operand is {}, right operand is {}",
                operation, lhs, rhs
            ),
            Self::SingularMatrix { column, pivot } => write!(
                f,
                "Singular matrix: no usable pivot in column {} (largest magnitude {})",
                column, pivot
            ),
            Self::EmptyDimension { rows, cols } => write!(
                f,
                "Invalid dimensions: {}x{} (rows and cols must be positive)",
                rows, cols
            ),
            Self::DimensionOverflow { rows, cols } => write!(
                f,
                "Dimension overflow: {}x{} elements exceed the addressable size",
                rows, cols
            ),
            Self::BufferLengthMismatch { rows, cols, len } => write!(
                f,
                "Buffer length mismatch: {}x{} requires {} values, got {}",
                rows,
                cols,
                rows.saturating_mul(*cols),
                len
            ),
            Self::RaggedRows { row, expected, got } => write!(
                f,
                "Ragged rows: row {} has {} values, expected {}",
                row, got, expected
            ),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {}", s),
            Self::InvalidTolerance(t) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", t)
            }
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            Self::UnknownOperator(name) => write!(
                f,
                "Unknown operator: '{}' (expected add, subtract, multiply or divide)",
                name
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
