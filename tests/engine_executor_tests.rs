#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use matcalc_rs::internals::engine::executor::{Executor, OperationRequest};
use matcalc_rs::internals::primitives::errors::MatrixError;
use matcalc_rs::internals::primitives::matrix::{Matrix, Shape};
use matcalc_rs::internals::primitives::operator::Operator;

fn a() -> Matrix<f64> {
    Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
}

fn b() -> Matrix<f64> {
    Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap()
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[test]
fn test_execute_dispatches_each_operator() {
    let exec = Executor::default();
    let (a, b) = (a(), b());

    let sum = exec
        .execute(OperationRequest::new(Operator::Add, &a, &b))
        .unwrap();
    assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);

    let diff = exec
        .execute(OperationRequest::new(Operator::Subtract, &a, &b))
        .unwrap();
    assert_eq!(diff.as_slice(), &[-4.0, -4.0, -4.0, -4.0]);

    let prod = exec
        .execute(OperationRequest::new(Operator::Multiply, &a, &b))
        .unwrap();
    assert_eq!(prod.as_slice(), &[19.0, 22.0, 43.0, 50.0]);

    let quot = exec
        .execute(OperationRequest::new(Operator::Divide, &a, &b))
        .unwrap();
    // A * B^-1 = [[1,2],[3,4]] * [[-4,3],[3.5,-2.5]] = [[3,-2],[2,-1]]
    let expected = [3.0, -2.0, 2.0, -1.0];
    for (got, want) in quot.as_slice().iter().zip(expected.iter()) {
        assert_relative_eq!(*got, *want, epsilon = 1e-12);
    }
}

#[test]
fn test_multiply_output_shape() {
    let exec = Executor::default();
    let a = Matrix::new(2, 3, vec![1.0; 6]).unwrap();
    let b = Matrix::new(3, 4, vec![1.0; 12]).unwrap();

    let c = exec.multiply(&a, &b).unwrap();
    assert_eq!(c.shape(), Shape::new(2, 4));
    assert!(c.as_slice().iter().all(|&v| v == 3.0));
}

#[test]
fn test_dimension_errors_name_the_operation() {
    let exec = Executor::default();
    let m23 = Matrix::new(2, 3, vec![0.0; 6]).unwrap();
    let m32 = Matrix::new(3, 2, vec![0.0; 6]).unwrap();

    for (op, name) in [
        (Operator::Add, "add"),
        (Operator::Subtract, "subtract"),
        (Operator::Divide, "divide"),
    ] {
        let err = exec
            .execute(OperationRequest::new(op, &m23, &m32))
            .unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                operation: name,
                lhs: Shape::new(2, 3),
                rhs: Shape::new(3, 2),
            }
        );
    }

    // 2x3 * 2x3 is not conformable
    assert!(matches!(
        exec.multiply(&m23, &m23),
        Err(MatrixError::DimensionMismatch {
            operation: "multiply",
            ..
        })
    ));
}

#[test]
fn test_divide_singular() {
    let exec = Executor::default();
    let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    assert!(matches!(
        exec.divide(&a(), &singular),
        Err(MatrixError::SingularMatrix { .. })
    ));
}

#[test]
fn test_invert_and_determinant() {
    let exec = Executor::default();
    let inv = exec.invert(&b()).unwrap();
    assert!(inv.approx_eq(
        &Matrix::from_rows(&[[-4.0, 3.0], [3.5, -2.5]]).unwrap(),
        1e-12
    ));
    assert_relative_eq!(exec.determinant(&b()).unwrap(), -2.0, epsilon = 1e-12);

    let rect = Matrix::new(1, 2, vec![1.0, 2.0]).unwrap();
    assert!(matches!(
        exec.invert(&rect),
        Err(MatrixError::DimensionMismatch {
            operation: "invert",
            ..
        })
    ));
    assert!(matches!(
        exec.determinant(&rect),
        Err(MatrixError::DimensionMismatch {
            operation: "determinant",
            ..
        })
    ));
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_default_configuration() {
    let exec = Executor::<f64>::default();
    assert_eq!(exec.pivot_tolerance, 1e-9);
    assert!(!exec.check_finite);
}

#[test]
fn test_check_finite() {
    let with_nan = Matrix::from_rows(&[[1.0, f64::NAN], [0.0, 1.0]]).unwrap();
    let id = Matrix::<f64>::identity(2).unwrap();

    // Off: NaN flows through
    let sum = Executor::default().add(&with_nan, &id).unwrap();
    assert!(sum.as_slice()[1].is_nan());

    // On: rejected before computing
    let strict = Executor::new(1e-9, true);
    assert!(matches!(
        strict.add(&with_nan, &id),
        Err(MatrixError::InvalidNumericValue(_))
    ));
    assert!(matches!(
        strict.multiply(&id, &with_nan),
        Err(MatrixError::InvalidNumericValue(ref s)) if s.starts_with("b[1]")
    ));
    assert!(matches!(
        strict.invert(&with_nan),
        Err(MatrixError::InvalidNumericValue(_))
    ));
}

#[test]
fn test_shape_checked_before_values() {
    let strict = Executor::new(1e-9, true);
    let nan_row = Matrix::from_rows(&[[f64::NAN, 1.0]]).unwrap();
    let col = Matrix::from_rows(&[[1.0], [2.0]]).unwrap();
    assert!(matches!(
        strict.add(&nan_row, &col),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_custom_tolerance() {
    let tiny = Matrix::from_rows(&[[1e-6, 0.0], [0.0, 1e-6]]).unwrap();
    assert!(Executor::default().invert(&tiny).is_ok());
    assert!(matches!(
        Executor::new(1e-3, false).invert(&tiny),
        Err(MatrixError::SingularMatrix { column: 0, .. })
    ));
}
