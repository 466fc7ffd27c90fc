//! Gauss–Jordan inversion and pivoted determinant.
//!
//! ## Purpose
//!
//! This module inverts a square row-major matrix by reducing the augmented
//! matrix `[M | I]` to `[I | M^-1]`, and computes determinants with the same
//! pivoting rule.
//!
//! ## Design notes
//!
//! * **Partial pivoting**: For each column the row with the largest absolute
//!   value at or below the diagonal becomes the pivot row. Ties keep the
//!   lowest row index. NaN candidates are never chosen.
//! * **Singularity**: A pivot whose magnitude is below the tolerance stops
//!   inversion with `SingularMatrix`, as does a column whose candidates are
//!   all NaN.
//! * **Scratch**: The `n x 2n` augmented buffer is allocated per call and
//!   dropped on return.
//!
//! ## Key concepts
//!
//! * **Augmented matrix**: Row `i` holds `M[i, ..]` followed by `I[i, ..]`.
//! * **Elimination**: After normalising the pivot row, column `c` is cleared
//!   in every other row, above and below the diagonal.
//!
//! ## Invariants
//!
//! * On success, `M * M^-1 ≈ I` within floating-point error.
//! * On failure, no output buffer is returned.
//!
//! ## Non-goals
//!
//! * Full pivoting, iterative refinement, or condition number estimation.
//! * Rank-revealing or pseudo-inverse fallbacks.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MatrixError;

/// Default pivot magnitude below which a matrix is treated as singular.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-9;

// ============================================================================
// Pivot Selection
// ============================================================================

/// Find the row in `col..n` with the largest `|value|` in `col`.
///
/// `stride` is the row length of `buf`. Returns the row index and magnitude.
/// NaN candidates are skipped; the magnitude is NaN only if every candidate
/// is NaN.
#[inline]
fn select_pivot<T: Float>(buf: &[T], stride: usize, n: usize, col: usize) -> (usize, T) {
    let mut best_row = col;
    let mut best = T::nan();
    for row in col..n {
        let val = buf[row * stride + col].abs();
        if val.is_nan() {
            continue;
        }
        if best.is_nan() || val > best {
            best = val;
            best_row = row;
        }
    }
    (best_row, best)
}

/// Swap rows `r1` and `r2` of a buffer with row length `stride`.
#[inline]
fn swap_rows<T>(buf: &mut [T], stride: usize, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
    let (head, tail) = buf.split_at_mut(hi * stride);
    head[lo * stride..(lo + 1) * stride].swap_with_slice(&mut tail[..stride]);
}

// ============================================================================
// Inversion
// ============================================================================

/// Invert the `n x n` row-major matrix `m`.
///
/// # Errors
///
/// Returns `MatrixError::SingularMatrix` if a pivot column has no entry with
/// magnitude at least `tolerance`.
pub fn invert<T: Float>(m: &[T], n: usize, tolerance: T) -> Result<Vec<T>, MatrixError> {
    debug_assert_eq!(m.len(), n * n);

    let width = 2 * n;

    // Step 1: Build [M | I]
    let mut aug = Vec::with_capacity(n * width);
    for (i, row) in m.chunks_exact(n).enumerate() {
        aug.extend_from_slice(row);
        aug.extend((0..n).map(|j| if i == j { T::one() } else { T::zero() }));
    }

    // Step 2: Reduce the left half to the identity
    for c in 0..n {
        let (pivot_row, magnitude) = select_pivot(&aug, width, n, c);
        if magnitude.is_nan() || magnitude < tolerance {
            return Err(MatrixError::SingularMatrix {
                column: c,
                pivot: magnitude.to_f64().unwrap_or(f64::NAN),
            });
        }

        swap_rows(&mut aug, width, c, pivot_row);

        let pivot = aug[c * width + c];
        for v in &mut aug[c * width..(c + 1) * width] {
            *v = *v / pivot;
        }

        for i in 0..n {
            if i == c {
                continue;
            }
            let factor = aug[i * width + c];
            if factor == T::zero() {
                continue;
            }
            for j in 0..width {
                aug[i * width + j] = aug[i * width + j] - factor * aug[c * width + j];
            }
        }
    }

    // Step 3: The right half is the inverse
    let mut inv = Vec::with_capacity(n * n);
    for row in aug.chunks_exact(width) {
        inv.extend_from_slice(&row[n..]);
    }
    Ok(inv)
}

// ============================================================================
// Determinant
// ============================================================================

/// Determinant of the `n x n` row-major matrix `m`.
///
/// Uses Gaussian elimination with the same pivot rule as [`invert`]. A column
/// with no non-zero candidate yields exactly zero.
pub fn determinant<T: Float>(m: &[T], n: usize) -> T {
    debug_assert_eq!(m.len(), n * n);

    let mut work = m.to_vec();
    let mut det = T::one();

    for c in 0..n {
        let (pivot_row, magnitude) = select_pivot(&work, n, n, c);
        if magnitude == T::zero() {
            return T::zero();
        }
        if pivot_row != c {
            swap_rows(&mut work, n, c, pivot_row);
            det = -det;
        }

        let pivot = work[c * n + c];
        det = det * pivot;

        for i in (c + 1)..n {
            let factor = work[i * n + c] / pivot;
            if factor == T::zero() {
                continue;
            }
            for j in c..n {
                work[i * n + j] = work[i * n + j] - factor * work[c * n + j];
            }
        }
    }

    det
}
