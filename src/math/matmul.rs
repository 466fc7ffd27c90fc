//! Dense matrix multiplication.
//!
//! ## Purpose
//!
//! This module computes `C = A * B` for row-major `A (m x k)` and
//! `B (k x n)`.
//!
//! ## Design notes
//!
//! * **Algorithm**: Naive triple loop, O(m * k * n).
//! * **Accumulation**: Each `C[i, j]` is summed in one scalar accumulator
//!   with `k` ascending, so results are reproducible across runs.
//!
//! ## Non-goals
//!
//! * Blocking, tiling, or SIMD dispatch.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Matrix Product
// ============================================================================

/// Multiply `a (rows_a x inner)` by `b (inner x cols_b)`.
pub fn matmul<T: Float>(a: &[T], b: &[T], rows_a: usize, inner: usize, cols_b: usize) -> Vec<T> {
    debug_assert_eq!(a.len(), rows_a * inner);
    debug_assert_eq!(b.len(), inner * cols_b);

    let mut out = Vec::with_capacity(rows_a * cols_b);
    for a_row in a.chunks_exact(inner) {
        for j in 0..cols_b {
            let mut acc = T::zero();
            for (k, &a_ik) in a_row.iter().enumerate() {
                acc = acc + a_ik * b[k * cols_b + j];
            }
            out.push(acc);
        }
    }
    out
}
