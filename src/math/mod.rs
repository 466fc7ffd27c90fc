//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical kernels, operating on row-major slices
//! whose shapes have already been validated:
//! - Element-wise addition and subtraction
//! - Matrix multiplication
//! - Gauss–Jordan inversion and pivoted determinant
//!
//! These are reusable building blocks with no knowledge of operators or
//! configuration.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element-wise kernels.
pub mod elementwise;

/// Matrix multiplication.
pub mod matmul;

/// Inversion and determinant.
pub mod gauss_jordan;
