//! Element-wise addition and subtraction kernels.
//!
//! ## Purpose
//!
//! This module combines two equally sized row-major buffers cell by cell.
//! Shape checks happen in the engine's validator before these kernels run.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * `add(a, b) == add(b, a)` and `sub(a, b) == -sub(b, a)` exactly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Kernels
// ============================================================================

/// Apply `f` to every pair of corresponding elements.
#[inline]
pub fn zip_with<T: Float, F: Fn(T, T) -> T>(a: &[T], b: &[T], f: F) -> Vec<T> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

/// `C[i] = A[i] + B[i]`.
#[inline]
pub fn add<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    zip_with(a, b, |x, y| x + y)
}

/// `C[i] = A[i] - B[i]`.
#[inline]
pub fn sub<T: Float>(a: &[T], b: &[T]) -> Vec<T> {
    zip_with(a, b, |x, y| x - y)
}
