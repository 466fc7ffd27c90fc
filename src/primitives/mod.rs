//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data types shared by every other layer:
//! - `Matrix` and `Shape` (row-major storage plus dimensions)
//! - `Operator` (operation tags)
//! - `MatrixError` (the crate-wide error type)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Dense matrix storage and shapes.
pub mod matrix;

/// Operator tags.
pub mod operator;

/// Conversions to and from nalgebra.
#[cfg(feature = "nalgebra")]
pub mod interop;
