//! # matcalc-rs: Dense Matrix Arithmetic for Rust
//!
//! A small, dependable engine for the four arithmetic operations on dense
//! matrices: element-wise addition and subtraction, matrix multiplication, and
//! matrix "division" `A * inverse(B)` via Gauss–Jordan elimination with partial
//! pivoting.
//!
//! **Key properties:**
//! - Row-major storage, `f32` or `f64` elements
//! - Shape errors are reported before any computation starts
//! - Singular divisors are reported as errors, never as placeholder output
//! - No global state: every call owns its inputs and returns a fresh result
//! - `no_std` support (with `alloc`)
//!
//! ## Quick Start
//!
//! ```rust
//! use matcalc_rs::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
//! let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]])?;
//!
//! // Build the engine with default settings
//! let engine = MatrixEngine::new().build()?;
//!
//! let sum = engine.add(&a, &b)?;
//! assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
//!
//! let product = engine.multiply(&a, &b)?;
//! assert_eq!(product.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//!
//! println!("{}", product);
//! # Result::<(), MatrixError>::Ok(())
//! ```
//!
//! ```text
//! 19 22
//! 43 50
//! ```
//!
//! ### Flat Buffers
//!
//! Callers that already hold row-major buffers and dimensions can skip
//! `Matrix` entirely. These functions use the default configuration.
//!
//! ```rust
//! use matcalc_rs::prelude::*;
//!
//! let a: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
//! let b: [f64; 4] = [5.0, 6.0, 7.0, 8.0];
//!
//! let sum = add(&a, &b, 2, 2)?;
//! let product = multiply(&a, &b, 2, 2, 2)?;
//! let inverse = invert(&b, 2)?;
//!
//! assert_eq!(sum, vec![6.0, 8.0, 10.0, 12.0]);
//! assert_eq!(product, vec![19.0, 22.0, 43.0, 50.0]);
//! assert!((inverse[0] + 4.0).abs() < 1e-9);
//! # Result::<(), MatrixError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, MatrixError>`:
//!
//! - **`DimensionMismatch`**: the operand shapes do not satisfy the
//!   operation's precondition.
//! - **`SingularMatrix`**: the divisor (or the matrix being inverted) has no
//!   usable pivot.
//!
//! ```rust
//! use matcalc_rs::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0]])?;
//! let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
//!
//! match MatrixEngine::new().build()?.divide(&a, &singular) {
//!     Ok(result) => println!("{}", result),
//!     Err(MatrixError::SingularMatrix { column, .. }) => {
//!         eprintln!("divisor is singular (column {})", column);
//!     }
//!     Err(e) => eprintln!("division failed: {}", e),
//! }
//! # Result::<(), MatrixError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter           | Default | Range         | Description                                  |
//! |---------------------|---------|---------------|----------------------------------------------|
//! | **pivot_tolerance** | `1e-9`  | (0, ∞), finite | Pivot magnitude below which inversion fails |
//! | **check_finite**    | off     | flag          | Reject NaN/±Inf inputs before computing      |
//!
//! ```rust
//! use matcalc_rs::prelude::*;
//!
//! let engine = MatrixEngine::<f32>::new()
//!     .pivot_tolerance(1e-6)
//!     .check_finite()
//!     .build()?;
//!
//! let m = Matrix::from_rows(&[[4.0_f32, 7.0], [2.0, 6.0]])?;
//! let det = engine.determinant(&m)?;
//! assert!((det - 10.0).abs() < 1e-5);
//! # Result::<(), MatrixError>::Ok(())
//! ```
//!
//! ## Operators
//!
//! Operations can also be selected at runtime with an [`Operator`](prelude::Operator)
//! tag, parsed from a name or symbol:
//!
//! ```rust
//! use matcalc_rs::prelude::*;
//!
//! let op: Operator = "subtract".parse()?;
//! let a = Matrix::from_rows(&[[3.0, 3.0]])?;
//! let b = Matrix::from_rows(&[[1.0, 2.0]])?;
//!
//! let diff = MatrixEngine::new().build()?.execute(op, &a, &b)?;
//! assert_eq!(diff.as_slice(), &[2.0, 1.0]);
//! # Result::<(), MatrixError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! matcalc-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): links the standard library and implements
//!   `std::error::Error` for `MatrixError`.
//! - `nalgebra`: conversions between `Matrix` and `nalgebra::DMatrix`.
//! - `dev`: exposes internal modules for testing.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data types.
//
// Contains `Matrix`, `Shape`, `Operator`, and `MatrixError`.
mod primitives;

// Layer 2: Math - numerical kernels.
//
// Contains element-wise kernels, matrix multiplication, and Gauss–Jordan
// inversion.
mod math;

// Layer 3: Engine - validation and dispatch.
//
// Contains the shape/value validator and the operator executor.
mod engine;

// High-level API.
//
// Provides the `EngineBuilder`, the `Engine`, and the flat-buffer functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard matcalc prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use matcalc_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DEFAULT_PIVOT_TOLERANCE, Engine, EngineBuilder as MatrixEngine, Matrix, MatrixError,
        Operator, Shape, add, divide, invert, multiply, subtract,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal numerical kernels.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal validation and dispatch.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
