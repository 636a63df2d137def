//! Error types for fallible matrix operations.
//!
//! ## Purpose
//!
//! This module defines [`Mat2Error`], the single error enum returned by the
//! fallible entry points of the crate: inversion of a singular matrix and
//! checked construction from non-finite values.
//!
//! ## Design notes
//!
//! * **Recoverable by construction**: inversion failure signals caller
//!   misuse, but it is reported as an ordinary `Result` so callers can
//!   branch without probing invertibility first.
//! * **Payloads are `f64`**: the matrix type is generic over `Float`, but
//!   error payloads are widened to `f64` so the enum stays non-generic and
//!   cheap to match on.
//! * **no_std**: `Display` is implemented via `core::fmt`; the
//!   `std::error::Error` impl is gated on the `std` feature.

// External dependencies
use core::fmt;

// ============================================================================
// Mat2Error
// ============================================================================

/// Errors produced by fallible 2x2 matrix operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Mat2Error {
    /// The matrix has no inverse: its determinant rounds to zero at three
    /// decimal places.
    NonInvertible {
        /// The unrounded determinant of the offending matrix.
        det: f64,
    },

    /// A matrix element was NaN or infinite during checked construction.
    NonFiniteElement {
        /// Row of the offending element (0 or 1).
        row: usize,
        /// Column of the offending element (0 or 1).
        col: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for Mat2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mat2Error::NonInvertible { det } => {
                write!(
                    f,
                    "Inverse does not exist: determinant {} rounds to 0 at 3 decimals",
                    det
                )
            }
            Mat2Error::NonFiniteElement { row, col, value } => {
                write!(f, "Non-finite element at ({}, {}): {}", row, col, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Mat2Error {}
