//! Layer 3: Matrix
//!
//! # Purpose
//!
//! This layer provides [`Mat2`], the 2x2 real-valued matrix type, and every
//! operation on it: construction, arithmetic, determinant, transpose,
//! inverse, and the rounded identity/invertibility checks.
//!
//! # Design notes
//!
//! * **Value semantics**: `Mat2` is `Copy`; equality is exact element-wise
//!   comparison. Two matrices with equal corresponding elements are equal,
//!   regardless of how they were produced.
//! * **Pure by default**: every operation returns a new matrix and leaves
//!   its operands unchanged. In-place scaling exists, but only under an
//!   explicit name (`mul_scalar_in_place`, `*=`).
//! * **Rounded predicates**: `is_identity`, `is_invertible`, and
//!   `is_inverse_of` round to three decimals before comparing, so float
//!   noise near zero does not flip their answers. Plain `==` never rounds.
//! * **Recoverable inversion**: `inverse` returns a `Result` instead of
//!   panicking on a singular matrix.
//!
//! # Invariants
//!
//! * Any four finite reals form a valid matrix; nothing is cached, and
//!   derived properties are recomputed on demand.
//! * `inverse` never divides by a determinant that rounds to zero.
//!
//! # Non-goals
//!
//! * Arbitrary dimensions, decompositions, eigenvalues, or complex
//!   elements.
//! * Numerical stability beyond the fixed three-decimal rounding.

// External dependencies
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::Float;

// Internal dependencies
use crate::math::rounding::{round_thousandths, rounds_to_zero};
use crate::primitives::errors::Mat2Error;

// ============================================================================
// Mat2
// ============================================================================

/// A 2x2 real-valued matrix, row-major:
///
/// ```text
/// [a b]
/// [c d]
/// ```
///
/// Generic over [`Float`], so `Mat2<f32>` and `Mat2<f64>` share one API.
/// Derived `PartialEq` gives exact element-wise equality with no rounding;
/// the approximate predicates ([`is_identity`](Mat2::is_identity),
/// [`is_invertible`](Mat2::is_invertible)) round to three decimals first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2<T: Float> {
    /// Top left element.
    pub a: T,
    /// Top right element.
    pub b: T,
    /// Bottom left element.
    pub c: T,
    /// Bottom right element.
    pub d: T,
}

// ============================================================================
// Construction
// ============================================================================

impl<T: Float> Mat2<T> {
    /// Create a matrix from its four elements, row-major.
    ///
    /// No validation is performed: NaN and infinite elements are accepted
    /// and propagate through arithmetic per IEEE 754. Use
    /// [`checked`](Mat2::checked) to reject them at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use mat2_rs::prelude::*;
    ///
    /// let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(m.a, 1.0);
    /// assert_eq!(m.d, 4.0);
    /// ```
    #[inline]
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self { a, b, c, d }
    }

    /// Create a matrix from two rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use mat2_rs::prelude::*;
    ///
    /// let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m, Mat2::new(1.0, 2.0, 3.0, 4.0));
    /// ```
    #[inline]
    pub fn from_rows(rows: [[T; 2]; 2]) -> Self {
        Self::new(rows[0][0], rows[0][1], rows[1][0], rows[1][1])
    }

    /// The zero matrix `(0, 0, 0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// The identity matrix `(1, 0, 0, 1)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one())
    }

    /// Create a matrix from its four elements, rejecting non-finite values.
    ///
    /// Fails fast on the first NaN or infinite element, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mat2_rs::prelude::*;
    ///
    /// assert!(Mat2::checked(1.0, 2.0, 3.0, 4.0).is_ok());
    /// assert!(Mat2::checked(1.0, f64::NAN, 3.0, 4.0).is_err());
    /// ```
    pub fn checked(a: T, b: T, c: T, d: T) -> Result<Self, Mat2Error> {
        for (row, col, value) in [(0, 0, a), (0, 1, b), (1, 0, c), (1, 1, d)] {
            if !value.is_finite() {
                return Err(Mat2Error::NonFiniteElement {
                    row,
                    col,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self::new(a, b, c, d))
    }
}

impl<T: Float> Default for Mat2<T> {
    /// The zero matrix.
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<T: Float> Mat2<T> {
    /// Element-wise sum. Also available as `+`.
    #[inline]
    pub fn add_mat2(&self, rhs: &Self) -> Self {
        Self::new(
            self.a + rhs.a,
            self.b + rhs.b,
            self.c + rhs.c,
            self.d + rhs.d,
        )
    }

    /// Element-wise difference. Also available as `-`.
    #[inline]
    pub fn sub_mat2(&self, rhs: &Self) -> Self {
        Self::new(
            self.a - rhs.a,
            self.b - rhs.b,
            self.c - rhs.c,
            self.d - rhs.d,
        )
    }

    /// Standard matrix product. Also available as `*`.
    ///
    /// Not commutative: `a * b` and `b * a` generally differ.
    #[inline]
    pub fn mul_mat2(&self, rhs: &Self) -> Self {
        Self::new(
            self.a * rhs.a + self.b * rhs.c,
            self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c,
            self.c * rhs.b + self.d * rhs.d,
        )
    }

    /// Every element multiplied by `k`, returned as a new matrix.
    ///
    /// The receiver is unchanged; see
    /// [`mul_scalar_in_place`](Mat2::mul_scalar_in_place) for the mutating
    /// form.
    ///
    /// # Examples
    ///
    /// ```
    /// use mat2_rs::prelude::*;
    ///
    /// let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(m.mul_scalar(2.0), Mat2::new(2.0, 4.0, 6.0, 8.0));
    /// assert_eq!(m.a, 1.0); // unchanged
    /// ```
    #[inline]
    pub fn mul_scalar(&self, k: T) -> Self {
        Self::new(self.a * k, self.b * k, self.c * k, self.d * k)
    }

    /// Multiply every element by `k` in place. Also available as `*=`.
    #[inline]
    pub fn mul_scalar_in_place(&mut self, k: T) {
        self.a = self.a * k;
        self.b = self.b * k;
        self.c = self.c * k;
        self.d = self.d * k;
    }

    /// The transpose: `b` and `c` swapped, `a` and `d` unchanged.
    ///
    /// Transposing twice returns the original matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::new(self.a, self.c, self.b, self.d)
    }

    /// The determinant `a*d - b*c`.
    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }
}

// ============================================================================
// Analysis
// ============================================================================

impl<T: Float> Mat2<T> {
    /// True if this matrix is the identity, comparing each element after
    /// rounding to three decimals.
    ///
    /// Note the asymmetry with `==`, which never rounds:
    /// `Mat2::new(1.0004, 0.0, 0.0, 1.0)` is *not* equal to the identity
    /// but `is_identity` accepts it.
    #[inline]
    pub fn is_identity(&self) -> bool {
        round_thousandths(self.a) == T::one()
            && rounds_to_zero(self.b)
            && rounds_to_zero(self.c)
            && round_thousandths(self.d) == T::one()
    }

    /// True if this matrix has an inverse: its determinant, rounded to
    /// three decimals, is nonzero.
    ///
    /// Rounding avoids false positives from float noise near zero.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        !rounds_to_zero(self.determinant())
    }

    /// True if `self` and `other` are inverses of each other: both are
    /// invertible and their product is the identity (rounded comparison).
    pub fn is_inverse_of(&self, other: &Self) -> bool {
        if !self.is_invertible() || !other.is_invertible() {
            return false;
        }
        self.mul_mat2(other).is_identity()
    }

    /// The inverse: the adjugate `[d, -b, -c, a]` scaled by
    /// `1/determinant()`.
    ///
    /// # Errors
    ///
    /// Returns [`Mat2Error::NonInvertible`] when the determinant rounds to
    /// zero at three decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use mat2_rs::prelude::*;
    ///
    /// let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(m.inverse()?, Mat2::new(-2.0, 1.0, 1.5, -0.5));
    ///
    /// let singular = Mat2::new(1.0, 2.0, 2.0, 4.0);
    /// assert!(singular.inverse().is_err());
    /// # Result::<(), Mat2Error>::Ok(())
    /// ```
    pub fn inverse(&self) -> Result<Self, Mat2Error> {
        let det = self.determinant();
        if rounds_to_zero(det) {
            return Err(Mat2Error::NonInvertible {
                det: det.to_f64().unwrap_or(f64::NAN),
            });
        }

        let adjugate = Self::new(self.d, -self.b, -self.c, self.a);
        Ok(adjugate.mul_scalar(det.recip()))
    }
}

// ============================================================================
// Operator Impls
// ============================================================================

impl<T: Float> Add for Mat2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.add_mat2(&rhs)
    }
}

impl<T: Float> AddAssign for Mat2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.add_mat2(&rhs);
    }
}

impl<T: Float> Sub for Mat2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.sub_mat2(&rhs)
    }
}

impl<T: Float> SubAssign for Mat2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.sub_mat2(&rhs);
    }
}

impl<T: Float> Mul for Mat2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat2(&rhs)
    }
}

impl<T: Float> Mul<T> for Mat2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.mul_scalar(rhs)
    }
}

impl<T: Float> MulAssign<T> for Mat2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.mul_scalar_in_place(rhs);
    }
}

impl<T: Float> Neg for Mat2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Float + fmt::Display> fmt::Display for Mat2<T> {
    /// Two bracketed lines, each element rounded to three decimals:
    ///
    /// ```text
    /// [1.235 0]
    /// [0 1.235]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{} {}]",
            round_thousandths(self.a),
            round_thousandths(self.b)
        )?;
        write!(
            f,
            "[{} {}]",
            round_thousandths(self.c),
            round_thousandths(self.d)
        )
    }
}
