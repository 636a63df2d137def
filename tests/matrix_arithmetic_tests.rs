use approx::assert_relative_eq;
use mat2_rs::prelude::*;

// ============================================================================
// Addition / Subtraction Tests
// ============================================================================

#[test]
fn test_addition_element_wise() {
    let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
    let b = Mat2::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a + b, Mat2::new(6.0, 8.0, 10.0, 12.0));
}

#[test]
fn test_addition_method_matches_operator() {
    let a = Mat2::new(0.5, -1.0, 2.25, 7.0);
    let b = Mat2::new(1.5, 1.0, -2.25, 3.0);
    assert_eq!(a.add_mat2(&b), a + b);
}

#[test]
fn test_subtraction_element_wise() {
    let a = Mat2::new(5.0, 6.0, 7.0, 8.0);
    let b = Mat2::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(a - b, Mat2::new(4.0, 4.0, 4.0, 4.0));
    assert_eq!(a.sub_mat2(&b), a - b);
}

#[test]
fn test_subtraction_not_commutative() {
    let a = Mat2::new(5.0, 6.0, 7.0, 8.0);
    let b = Mat2::new(1.0, 2.0, 3.0, 4.0);
    assert_ne!(a - b, b - a);
}

#[test]
fn test_add_sub_assign() {
    let mut m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    m += Mat2::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(m, Mat2::new(2.0, 3.0, 4.0, 5.0));
    m -= Mat2::new(2.0, 3.0, 4.0, 5.0);
    assert_eq!(m, Mat2::zero());
}

// ============================================================================
// Matrix Product Tests
// ============================================================================

#[test]
fn test_matrix_product() {
    // (1*5+2*7, 1*6+2*8, 3*5+4*7, 3*6+4*8)
    let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
    let b = Mat2::new(5.0, 6.0, 7.0, 8.0);
    assert_eq!(a * b, Mat2::new(19.0, 22.0, 43.0, 50.0));
    assert_eq!(a.mul_mat2(&b), a * b);
}

#[test]
fn test_matrix_product_not_commutative() {
    let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
    let b = Mat2::new(0.0, 1.0, 1.0, 0.0);
    assert_ne!(a * b, b * a);
}

#[test]
fn test_product_leaves_operands_unchanged() {
    let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
    let b = Mat2::new(5.0, 6.0, 7.0, 8.0);
    let _ = a * b;
    assert_eq!(a, Mat2::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(b, Mat2::new(5.0, 6.0, 7.0, 8.0));
}

// ============================================================================
// Scalar Scaling Tests
// ============================================================================

#[test]
fn test_mul_scalar_is_pure() {
    let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    let scaled = m.mul_scalar(2.5);
    assert_eq!(scaled, Mat2::new(2.5, 5.0, 7.5, 10.0));
    assert_eq!(m, Mat2::new(1.0, 2.0, 3.0, 4.0)); // receiver untouched
    assert_eq!(m * 2.5, scaled);
}

#[test]
fn test_mul_scalar_in_place_mutates() {
    let mut m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    m.mul_scalar_in_place(-1.0);
    assert_eq!(m, Mat2::new(-1.0, -2.0, -3.0, -4.0));

    let mut n = Mat2::new(1.0, 2.0, 3.0, 4.0);
    n *= 0.5;
    assert_eq!(n, Mat2::new(0.5, 1.0, 1.5, 2.0));
}

#[test]
fn test_scale_by_zero() {
    let m = Mat2::new(1.0, -2.0, 3.5, 4.0);
    assert_eq!(m.mul_scalar(0.0), Mat2::zero());
}

#[test]
fn test_negation() {
    let m = Mat2::new(1.0, -2.0, 3.0, -4.0);
    assert_eq!(-m, m.mul_scalar(-1.0));
}

// ============================================================================
// Transpose / Determinant Tests
// ============================================================================

#[test]
fn test_transpose_swaps_off_diagonal() {
    let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(m.transpose(), Mat2::new(1.0, 3.0, 2.0, 4.0));
}

#[test]
fn test_determinant() {
    let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    assert_relative_eq!(m.determinant(), -2.0);
    assert_relative_eq!(Mat2::<f64>::identity().determinant(), 1.0);
    assert_relative_eq!(Mat2::<f64>::zero().determinant(), 0.0);
}

#[test]
fn test_determinant_of_product() {
    // det(AB) = det(A) * det(B)
    let a = Mat2::new(2.0, 1.0, 0.5, 3.0);
    let b = Mat2::new(-1.0, 4.0, 2.0, 0.25);
    assert_relative_eq!(
        (a * b).determinant(),
        a.determinant() * b.determinant(),
        max_relative = 1e-12
    );
}
