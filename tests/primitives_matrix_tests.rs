use matcalc_rs::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_row_major_layout() {
    let m = Matrix::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.shape(), Shape::new(2, 3));
    assert_eq!(m.len(), 6);
    assert!(!m.is_empty());
    // (i, j) at i * cols + j
    assert_eq!(m[(0, 2)], 3.0);
    assert_eq!(m[(1, 0)], 4.0);
}

#[test]
fn test_new_rejects_wrong_length() {
    let err = Matrix::new(2, 2, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::BufferLengthMismatch {
            rows: 2,
            cols: 2,
            len: 3
        }
    );
}

#[test]
fn test_new_rejects_zero_dimension() {
    let err = Matrix::<f64>::new(0, 3, vec![]).unwrap_err();
    assert_eq!(err, MatrixError::EmptyDimension { rows: 0, cols: 3 });

    let err = Matrix::<f64>::from_slice(2, 0, &[]).unwrap_err();
    assert_eq!(err, MatrixError::EmptyDimension { rows: 2, cols: 0 });
}

#[test]
fn test_from_slice_copies() {
    let buf = [1.0, 2.0, 3.0, 4.0];
    let m = Matrix::from_slice(2, 2, &buf).unwrap();
    assert_eq!(m.as_slice(), &buf);
}

#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
    assert_eq!(m.shape(), Shape::new(3, 2));
    assert_eq!(m.row(2), Some([5.0, 6.0].as_slice()));
    assert_eq!(m.row(3), None);
}

#[test]
fn test_from_rows_ragged() {
    let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::RaggedRows {
            row: 1,
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn test_from_rows_empty() {
    let rows: Vec<Vec<f64>> = Vec::new();
    assert!(matches!(
        Matrix::from_rows(rows.as_slice()),
        Err(MatrixError::EmptyDimension { rows: 0, cols: 0 })
    ));
}

#[test]
fn test_zeros_and_identity() {
    let z = Matrix::<f64>::zeros(2, 3).unwrap();
    assert!(z.as_slice().iter().all(|&v| v == 0.0));

    let i = Matrix::<f64>::identity(3).unwrap();
    assert_eq!(
        i.as_slice(),
        &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
    );
    assert!(i.is_square());

    assert!(Matrix::<f32>::identity(0).is_err());
}

#[test]
fn test_zeros_and_identity_reject_overflowing_shapes() {
    let huge = 1usize << (usize::BITS / 2 + 1);
    assert_eq!(
        Matrix::<f64>::zeros(huge, huge).unwrap_err(),
        MatrixError::DimensionOverflow {
            rows: huge,
            cols: huge
        }
    );
    assert!(matches!(
        Matrix::<f64>::identity(huge),
        Err(MatrixError::DimensionOverflow { .. })
    ));
    assert!(matches!(
        Matrix::<f32>::zeros(usize::MAX, 2),
        Err(MatrixError::DimensionOverflow { .. })
    ));
}

#[test]
fn test_shape_checked_len() {
    assert_eq!(Shape::new(3, 4).checked_len(), Ok(12));
    assert_eq!(
        Shape::new(0, 4).checked_len(),
        Err(MatrixError::EmptyDimension { rows: 0, cols: 4 })
    );
    assert_eq!(
        Shape::new(usize::MAX, 2).checked_len(),
        Err(MatrixError::DimensionOverflow {
            rows: usize::MAX,
            cols: 2
        })
    );
    assert_eq!(Shape::new(usize::MAX, 2).len(), usize::MAX);
}

// ============================================================================
// Accessor Tests
// ============================================================================

#[test]
fn test_get_in_and_out_of_range() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(m.get(1, 1), Some(4.0));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.get(0, 2), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_out_of_range_panics() {
    let m = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
    let _ = m[(1, 0)];
}

#[test]
fn test_row_iter() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let rows: Vec<&[f64]> = m.row_iter().collect();
    assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
}

#[test]
fn test_into_vec() {
    let m = Matrix::from_rows(&[[7.0, 8.0]]).unwrap();
    assert_eq!(m.into_vec(), vec![7.0, 8.0]);
}

#[test]
fn test_approx_eq() {
    let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
    let b = Matrix::from_rows(&[[1.0 + 1e-10, 2.0 - 1e-10]]).unwrap();
    let c = Matrix::from_rows(&[[1.0], [2.0]]).unwrap();

    assert!(a.approx_eq(&b, 1e-9));
    assert!(!a.approx_eq(&b, 1e-12));
    // Different shape, same buffer
    assert!(!a.approx_eq(&c, 1.0));
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_display() {
    let m = Matrix::from_rows(&[[1.0, 2.5], [-3.0, 4.0]]).unwrap();
    assert_eq!(format!("{}", m), "1 2.5\n-3 4");
    assert_eq!(format!("{:.2}", m), "1.00 2.50\n-3.00 4.00");
}

#[test]
fn test_shape_display_and_helpers() {
    let s = Shape::new(3, 4);
    assert_eq!(format!("{}", s), "3x4");
    assert_eq!(s.len(), 12);
    assert!(!s.is_square());
    assert!(!s.is_empty());
    assert!(Shape::new(0, 4).is_empty());
    assert!(s.check_buffer(12).is_ok());
    assert!(s.check_buffer(11).is_err());
}
