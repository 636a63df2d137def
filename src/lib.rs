//! # mat2-rs — 2x2 real-valued matrices for Rust
//!
//! A small, self-contained 2x2 matrix value type: construction, equality,
//! addition, subtraction, matrix and scalar multiplication, determinant,
//! transpose, inverse, and identity/invertibility checks.
//!
//! This crate is deliberately *not* a general linear-algebra library. There
//! are no arbitrary dimensions, no decompositions, and no eigenvalues — just
//! one well-behaved value type for callers that need exactly a 2x2 matrix.
//!
//! ## Quick Start
//!
//! ```rust
//! use mat2_rs::prelude::*;
//!
//! let a = Mat2::new(1.0, 2.0, 3.0, 4.0);
//! let b = Mat2::new(5.0, 6.0, 7.0, 8.0);
//!
//! assert_eq!(a + b, Mat2::new(6.0, 8.0, 10.0, 12.0));
//! assert_eq!(a * b, Mat2::new(19.0, 22.0, 43.0, 50.0));
//! assert_eq!(a.determinant(), -2.0);
//!
//! let inv = a.inverse()?;
//! assert_eq!(inv, Mat2::new(-2.0, 1.0, 1.5, -0.5));
//! assert!(a.is_inverse_of(&inv));
//! # Result::<(), Mat2Error>::Ok(())
//! ```
//!
//! ## The matrix layout
//!
//! Elements are addressed by fixed position, row-major:
//!
//! ```text
//! [a b]
//! [c d]
//! ```
//!
//! `Mat2` is generic over [`num_traits::Float`], so both `f32` and `f64`
//! matrices work with the same API. The `Mat2F32` and `Mat2F64` aliases name
//! the two common instantiations.
//!
//! ## Operations
//!
//! | Operation | Form | Result |
//! |-----------|------|--------|
//! | Addition | `a + b`, `a.add_mat2(b)` | new matrix, element-wise sum |
//! | Subtraction | `a - b`, `a.sub_mat2(b)` | new matrix, element-wise difference |
//! | Matrix product | `a * b`, `a.mul_mat2(b)` | new matrix, standard 2x2 product |
//! | Scalar product | `a * k`, `a.mul_scalar(k)` | new matrix, every element scaled |
//! | In-place scaling | `a *= k`, `a.mul_scalar_in_place(k)` | mutates every element |
//! | Determinant | `a.determinant()` | `a*d - b*c` |
//! | Transpose | `a.transpose()` | new matrix with `b` and `c` swapped |
//! | Inverse | `a.inverse()` | `Result` — adjugate scaled by `1/det` |
//! | Identity check | `a.is_identity()` | rounded comparison against `(1, 0, 0, 1)` |
//! | Invertibility | `a.is_invertible()` | rounded determinant is nonzero |
//! | Inverse pair | `a.is_inverse_of(&b)` | both invertible and `a * b` is the identity |
//!
//! ## Precision model
//!
//! Equality (`==`) is exact, element-wise comparison with no rounding.
//! Every *approximate* question — "is this the identity?", "is this
//! invertible?", "does this display as zero?" — first rounds to three
//! decimal places (`round(x * 1000) / 1000`). This keeps floating-point
//! noise near zero from turning an obviously singular matrix into an
//! "invertible" one:
//!
//! ```rust
//! use mat2_rs::prelude::*;
//!
//! // Determinant is exactly 0; the second row is 2x the first.
//! let singular = Mat2::new(1.0, 2.0, 2.0, 4.0);
//! assert!(!singular.is_invertible());
//! assert!(singular.inverse().is_err());
//! ```
//!
//! The same rounding drives [`Display`](core::fmt::Display):
//!
//! ```rust
//! use mat2_rs::prelude::*;
//!
//! let m = Mat2::new(1.23456, 0.0, 0.0, 1.23454);
//! assert_eq!(m.to_string(), "[1.235 0]\n[0 1.235]");
//! assert!(!m.is_identity()); // 1.235 != 1 even after rounding
//! ```
//!
//! ## Error handling
//!
//! The only fallible operations return `Result<_, Mat2Error>`:
//!
//! - `inverse` fails with `Mat2Error::NonInvertible` when the determinant
//!   rounds to zero at three decimals.
//! - `checked` fails with `Mat2Error::NonFiniteElement` when given NaN or
//!   infinite elements.
//!
//! ```rust
//! use mat2_rs::prelude::*;
//!
//! let singular = Mat2::new(2.0, 6.0, 1.0, 3.0);
//! match singular.inverse() {
//!     Ok(inv) => println!("{}", inv),
//!     Err(e) => eprintln!("{}", e), // "Inverse does not exist: ..."
//! }
//! ```
//!
//! Everything else is a total function over finite inputs and never fails.
//! Non-finite elements are accepted by `Mat2::new` and propagate through
//! arithmetic per IEEE 754 semantics; use `Mat2::checked` to reject them
//! up front.
//!
//! ## no_std
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! mat2-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, everything works except the `std::error::Error` impl on
//! `Mat2Error` (the `Display` impl is always available).
//!
//! ## Concurrency
//!
//! All operations are pure, synchronous computations on a `Copy` value type
//! (except the explicitly named in-place scaling). The type provides no
//! internal locking; callers sharing a matrix across threads synchronize it
//! like any other plain value.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - the error type.
mod primitives;

// Layer 2: Math - pure scalar helpers.
//
// Contains the fixed-precision rounding that all approximate comparisons
// and display formatting share.
mod math;

// Layer 3: Matrix - the Mat2 value type and its operations.
mod matrix;

// Public surface.
//
// Re-exports the matrix type, the error type, and the common aliases.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the commonly used types:
///
/// ```
/// use mat2_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{Mat2, Mat2Error, Mat2F32, Mat2F64};
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal matrix module.
    pub mod matrix {
        pub use crate::matrix::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
