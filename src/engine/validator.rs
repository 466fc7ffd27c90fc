//! Input validation for matrix operations and engine configuration.
//!
//! ## Purpose
//!
//! This module checks operand shapes against each operation's precondition,
//! optionally checks that inputs are finite, and validates configuration
//! parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Before computation**: Every check runs before any output is allocated.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Same shape**: Add and subtract need identical `(rows, cols)`.
//! * **Conformable**: Multiply needs `cols(A) == rows(B)`.
//! * **Square**: Invert and determinant need `rows == cols`; divide needs
//!   both operands square and equal-sized.
//!
//! ## Non-goals
//!
//! * This module does not coerce or reshape inputs.
//! * This module does not decide singularity (that needs elimination).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MatrixError;
use crate::primitives::matrix::Shape;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for operand shapes, values, and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate that a buffer of `len` values can back a `rows x cols` matrix.
    #[inline]
    pub fn validate_buffer(rows: usize, cols: usize, len: usize) -> Result<Shape, MatrixError> {
        let shape = Shape::new(rows, cols);
        shape.check_buffer(len)?;
        Ok(shape)
    }

    /// Validate that both operands have identical shapes.
    pub fn validate_same_shape(
        operation: &'static str,
        lhs: Shape,
        rhs: Shape,
    ) -> Result<(), MatrixError> {
        if lhs != rhs {
            return Err(MatrixError::DimensionMismatch {
                operation,
                lhs,
                rhs,
            });
        }
        Ok(())
    }

    /// Validate that `lhs * rhs` is defined.
    pub fn validate_conformable(lhs: Shape, rhs: Shape) -> Result<(), MatrixError> {
        if lhs.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiply",
                lhs,
                rhs,
            });
        }
        Ok(())
    }

    /// Validate that a single operand is square.
    pub fn validate_square(operation: &'static str, shape: Shape) -> Result<(), MatrixError> {
        if !shape.is_square() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                lhs: shape,
                rhs: shape,
            });
        }
        Ok(())
    }

    /// Validate divide operands: both square and the same size.
    pub fn validate_divisible(lhs: Shape, rhs: Shape) -> Result<(), MatrixError> {
        if !rhs.is_square() || lhs != rhs {
            return Err(MatrixError::DimensionMismatch {
                operation: "divide",
                lhs,
                rhs,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Value Validation
    // ========================================================================

    /// Validate that every value is finite.
    pub fn validate_finite<T: Float>(values: &[T], name: &str) -> Result<(), MatrixError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(MatrixError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the pivot tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), MatrixError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(MatrixError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), MatrixError> {
        if let Some(param) = duplicate_param {
            return Err(MatrixError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
