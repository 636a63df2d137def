use mat2_rs::prelude::*;

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_mat2_error_display() {
    // NonInvertible
    let err = Mat2Error::NonInvertible { det: 0.0 };
    assert_eq!(
        format!("{}", err),
        "Inverse does not exist: determinant 0 rounds to 0 at 3 decimals"
    );

    // NonInvertible with a near-zero determinant
    let err = Mat2Error::NonInvertible { det: 0.0004 };
    assert_eq!(
        format!("{}", err),
        "Inverse does not exist: determinant 0.0004 rounds to 0 at 3 decimals"
    );

    // NonFiniteElement (NaN)
    let err = Mat2Error::NonFiniteElement {
        row: 0,
        col: 1,
        value: f64::NAN,
    };
    assert_eq!(format!("{}", err), "Non-finite element at (0, 1): NaN");

    // NonFiniteElement (infinity)
    let err = Mat2Error::NonFiniteElement {
        row: 1,
        col: 0,
        value: f64::NEG_INFINITY,
    };
    assert_eq!(format!("{}", err), "Non-finite element at (1, 0): -inf");
}

// ============================================================================
// Property Tests
// ============================================================================

#[test]
fn test_mat2_error_properties() {
    let err1 = Mat2Error::NonInvertible { det: 0.0 };
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(
        err1,
        Mat2Error::NonFiniteElement {
            row: 0,
            col: 0,
            value: 0.0,
        }
    );
}

#[cfg(feature = "std")]
#[test]
fn test_mat2_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<Mat2Error>();
}
