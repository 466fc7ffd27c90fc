//! High-level API for matrix arithmetic.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points:
//! - a fluent builder (`EngineBuilder`) that configures and validates an
//!   [`Engine`];
//! - the `Engine` itself, operating on [`Matrix`] values;
//! - flat-buffer functions ([`add`], [`subtract`], [`multiply`], [`divide`],
//!   [`invert`]) for callers that hold plain row-major buffers plus
//!   dimensions, using the default configuration.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter has a default; set only what you change.
//! * **Validated**: Parameters are checked once, in `.build()`.
//! * **Type-Safe**: Generic over `Float` types (`f32` and `f64`).
//!
//! ### Configuration Flow
//!
//! 1. Create an [`EngineBuilder`] via `MatrixEngine::new()`.
//! 2. Chain configuration methods (`.pivot_tolerance()`, `.check_finite()`).
//! 3. Call `.build()` to obtain an [`Engine`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{Executor, OperationRequest, default_tolerance};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::math::gauss_jordan::DEFAULT_PIVOT_TOLERANCE;
pub use crate::primitives::errors::MatrixError;
pub use crate::primitives::matrix::{Matrix, Shape};
pub use crate::primitives::operator::Operator;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an [`Engine`].
#[derive(Debug, Clone)]
pub struct EngineBuilder<T: Float> {
    /// Pivot magnitude below which inversion fails (default: 1e-9).
    pub pivot_tolerance: Option<T>,

    /// Reject NaN and infinite inputs (default: false).
    pub check_finite: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for EngineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> EngineBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            pivot_tolerance: None,
            check_finite: None,
            duplicate_param: None,
        }
    }

    /// Set the pivot magnitude below which a matrix is treated as singular.
    pub fn pivot_tolerance(mut self, tolerance: T) -> Self {
        if self.pivot_tolerance.is_some() {
            self.duplicate_param = Some("pivot_tolerance");
        }
        self.pivot_tolerance = Some(tolerance);
        self
    }

    /// Reject NaN and infinite inputs with `InvalidNumericValue`.
    pub fn check_finite(mut self) -> Self {
        if self.check_finite.is_some() {
            self.duplicate_param = Some("check_finite");
        }
        self.check_finite = Some(true);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Engine<T>, MatrixError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate pivot tolerance
        let pivot_tolerance = self.pivot_tolerance.unwrap_or_else(default_tolerance);
        Validator::validate_tolerance(pivot_tolerance)?;

        Ok(Engine {
            executor: Executor::new(pivot_tolerance, self.check_finite.unwrap_or(false)),
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Configured matrix arithmetic engine.
///
/// Holds only configuration; it is `Copy` and may be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine<T> {
    executor: Executor<T>,
}

impl<T: Float> Default for Engine<T> {
    fn default() -> Self {
        Self {
            executor: Executor::default(),
        }
    }
}

impl<T: Float> Engine<T> {
    /// Pivot tolerance in effect.
    #[inline]
    pub fn pivot_tolerance(&self) -> T {
        self.executor.pivot_tolerance
    }

    /// Whether inputs are checked for NaN and infinities.
    #[inline]
    pub fn checks_finite(&self) -> bool {
        self.executor.check_finite
    }

    /// Apply `operator` to `a` and `b`.
    pub fn execute(
        &self,
        operator: Operator,
        a: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<Matrix<T>, MatrixError> {
        self.executor.execute(OperationRequest::new(operator, a, b))
    }

    /// Element-wise `A + B`.
    pub fn add(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.executor.add(a, b)
    }

    /// Element-wise `A - B`.
    pub fn subtract(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.executor.subtract(a, b)
    }

    /// Matrix product `A * B`.
    pub fn multiply(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.executor.multiply(a, b)
    }

    /// `A * inverse(B)` for equal-sized square `A` and `B`.
    pub fn divide(&self, a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.executor.divide(a, b)
    }

    /// Inverse of a square matrix.
    pub fn invert(&self, m: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.executor.invert(m)
    }

    /// Determinant of a square matrix.
    pub fn determinant(&self, m: &Matrix<T>) -> Result<T, MatrixError> {
        self.executor.determinant(m)
    }
}

// ============================================================================
// Flat-buffer Interface
// ============================================================================

/// Element-wise sum of two `rows x cols` row-major buffers.
pub fn add<T: Float>(a: &[T], b: &[T], rows: usize, cols: usize) -> Result<Vec<T>, MatrixError> {
    let a = flat_matrix(a, rows, cols)?;
    let b = flat_matrix(b, rows, cols)?;
    Engine::default().add(&a, &b).map(Matrix::into_vec)
}

/// Element-wise difference of two `rows x cols` row-major buffers.
pub fn subtract<T: Float>(
    a: &[T],
    b: &[T],
    rows: usize,
    cols: usize,
) -> Result<Vec<T>, MatrixError> {
    let a = flat_matrix(a, rows, cols)?;
    let b = flat_matrix(b, rows, cols)?;
    Engine::default().subtract(&a, &b).map(Matrix::into_vec)
}

/// Product of `a (rows_a x cols_a)` and `b (cols_a x cols_b)`.
pub fn multiply<T: Float>(
    a: &[T],
    b: &[T],
    rows_a: usize,
    cols_a: usize,
    cols_b: usize,
) -> Result<Vec<T>, MatrixError> {
    let a = flat_matrix(a, rows_a, cols_a)?;
    let b = flat_matrix(b, cols_a, cols_b)?;
    Engine::default().multiply(&a, &b).map(Matrix::into_vec)
}

/// `a * inverse(b)` for two `n x n` row-major buffers.
pub fn divide<T: Float>(a: &[T], b: &[T], n: usize) -> Result<Vec<T>, MatrixError> {
    let a = flat_matrix(a, n, n)?;
    let b = flat_matrix(b, n, n)?;
    Engine::default().divide(&a, &b).map(Matrix::into_vec)
}

/// Inverse of an `n x n` row-major buffer.
pub fn invert<T: Float>(m: &[T], n: usize) -> Result<Vec<T>, MatrixError> {
    let m = flat_matrix(m, n, n)?;
    Engine::default().invert(&m).map(Matrix::into_vec)
}

/// Wrap a caller buffer once it has been checked against its dimensions.
fn flat_matrix<T: Float>(data: &[T], rows: usize, cols: usize) -> Result<Matrix<T>, MatrixError> {
    let shape = Validator::validate_buffer(rows, cols, data.len())?;
    Ok(Matrix::from_parts(shape.rows, shape.cols, data.to_vec()))
}
