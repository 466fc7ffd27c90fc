//! Execution engine for matrix operations.
//!
//! ## Purpose
//!
//! This module dispatches operation requests to the math kernels. For every
//! call it validates operand shapes, optionally checks that inputs are
//! finite, runs the kernel, and wraps the result in a fresh `Matrix`.
//!
//! ## Design notes
//!
//! * **Validate, then compute**: Shape errors are reported before any kernel
//!   runs or any output is allocated.
//! * **Composition**: Divide is `multiply(A, invert(B))`; it adds no numerics
//!   of its own.
//! * **Stateless**: The executor only holds configuration, so one instance
//!   can serve concurrent callers.
//!
//! ## Invariants
//!
//! * A returned matrix never aliases either input.
//! * Errors never carry or imply a partial result.
//!
//! ## Non-goals
//!
//! * This module does not parse operator names (see `Operator::from_str`).
//! * This module does not validate its own configuration (handled by the
//!   builder).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::elementwise;
use crate::math::gauss_jordan::{self, DEFAULT_PIVOT_TOLERANCE};
use crate::math::matmul::matmul;
use crate::primitives::errors::MatrixError;
use crate::primitives::matrix::Matrix;
use crate::primitives::operator::Operator;

// ============================================================================
// Operation Request
// ============================================================================

/// An operator applied to two borrowed operands.
#[derive(Debug, Clone, Copy)]
pub struct OperationRequest<'a, T> {
    /// Operation to perform.
    pub operator: Operator,
    /// Left operand.
    pub lhs: &'a Matrix<T>,
    /// Right operand.
    pub rhs: &'a Matrix<T>,
}

impl<'a, T> OperationRequest<'a, T> {
    /// Create a request.
    pub fn new(operator: Operator, lhs: &'a Matrix<T>, rhs: &'a Matrix<T>) -> Self {
        Self { operator, lhs, rhs }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Resolved configuration plus operation dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Executor<T> {
    /// Pivot magnitude below which inversion fails.
    pub pivot_tolerance: T,

    /// Reject NaN and infinite inputs before computing.
    pub check_finite: bool,
}

impl<T: Float> Default for Executor<T> {
    fn default() -> Self {
        Self {
            pivot_tolerance: default_tolerance(),
            check_finite: false,
        }
    }
}

/// `DEFAULT_PIVOT_TOLERANCE` converted to `T`.
pub(crate) fn default_tolerance<T: Float>() -> T {
    T::from(DEFAULT_PIVOT_TOLERANCE).unwrap_or_else(T::epsilon)
}

impl<T: Float> Executor<T> {
    /// Create an executor with explicit settings.
    pub fn new(pivot_tolerance: T, check_finite: bool) -> Self {
        Self {
            pivot_tolerance,
            check_finite,
        }
    }

    /// Run a request.
    pub fn execute(&self, request: OperationRequest<'_, T>) -> Result<Matrix<T>, MatrixError> {
        let OperationRequest { operator, lhs, rhs } = request;
        match operator {
            Operator::Add => self.add(lhs, rhs),
            Operator::Subtract => self.subtract(lhs, rhs),
            Operator::Multiply => self.multiply(lhs, rhs),
            Operator::Divide => self.divide(lhs, rhs),
        }
    }

    /// `A + B`.
    pub fn add(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Validator::validate_same_shape(Operator::Add.name(), a.shape(), b.shape())?;
        self.check_operands(a, b)?;
        let data = elementwise::add(a.as_slice(), b.as_slice());
        Ok(Matrix::from_parts(a.rows(), a.cols(), data))
    }

    /// `A - B`.
    pub fn subtract(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Validator::validate_same_shape(Operator::Subtract.name(), a.shape(), b.shape())?;
        self.check_operands(a, b)?;
        let data = elementwise::sub(a.as_slice(), b.as_slice());
        Ok(Matrix::from_parts(a.rows(), a.cols(), data))
    }

    /// `A * B`.
    pub fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Validator::validate_conformable(a.shape(), b.shape())?;
        self.check_operands(a, b)?;
        let data = matmul(a.as_slice(), b.as_slice(), a.rows(), a.cols(), b.cols());
        Ok(Matrix::from_parts(a.rows(), b.cols(), data))
    }

    /// `A * inverse(B)` for equal-sized square operands.
    pub fn divide(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Validator::validate_divisible(a.shape(), b.shape())?;
        self.check_operands(a, b)?;
        let n = b.rows();
        let b_inv = gauss_jordan::invert(b.as_slice(), n, self.pivot_tolerance)?;
        let data = matmul(a.as_slice(), &b_inv, n, n, n);
        Ok(Matrix::from_parts(n, n, data))
    }

    /// Inverse of a square matrix.
    pub fn invert(&self, m: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        Validator::validate_square("invert", m.shape())?;
        if self.check_finite {
            Validator::validate_finite(m.as_slice(), "m")?;
        }
        let n = m.rows();
        let data = gauss_jordan::invert(m.as_slice(), n, self.pivot_tolerance)?;
        Ok(Matrix::from_parts(n, n, data))
    }

    /// Determinant of a square matrix.
    pub fn determinant(&self, m: &Matrix<T>) -> Result<T, MatrixError> {
        Validator::validate_square("determinant", m.shape())?;
        if self.check_finite {
            Validator::validate_finite(m.as_slice(), "m")?;
        }
        Ok(gauss_jordan::determinant(m.as_slice(), m.rows()))
    }

    #[inline]
    fn check_operands(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<(), MatrixError> {
        if self.check_finite {
            Validator::validate_finite(a.as_slice(), "a")?;
            Validator::validate_finite(b.as_slice(), "b")?;
        }
        Ok(())
    }
}
