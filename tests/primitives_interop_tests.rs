#![cfg(feature = "nalgebra")]

use matcalc_rs::prelude::*;
use nalgebra::DMatrix;

#[test]
fn test_to_dmatrix_preserves_positions() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let d = m.to_dmatrix();

    assert_eq!(d.shape(), (2, 3));
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(d[(i, j)], m[(i, j)]);
        }
    }
}

#[test]
fn test_from_dmatrix_is_row_major() {
    // nalgebra's from_column_slice: columns [1, 4], [2, 5], [3, 6]
    let d = DMatrix::from_column_slice(2, 3, &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    let m = Matrix::from_dmatrix(&d).unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_from_dmatrix_rejects_empty() {
    let d = DMatrix::<f64>::zeros(0, 3);
    assert_eq!(
        Matrix::from_dmatrix(&d).unwrap_err(),
        MatrixError::EmptyDimension { rows: 0, cols: 3 }
    );
}

#[test]
fn test_engine_result_into_nalgebra() {
    let engine = MatrixEngine::new().build().unwrap();
    let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    let inv = engine.invert(&b).unwrap().to_dmatrix();
    let product = b.to_dmatrix() * inv;
    assert!((product - DMatrix::identity(2, 2)).norm() < 1e-12);
}
