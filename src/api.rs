//! Public surface of the crate.
//!
//! ## Purpose
//!
//! This module gathers the user-facing types from the internal layers into
//! one place. The [`prelude`](crate::prelude) re-exports from here.

// Publicly re-exported types
pub use crate::matrix::Mat2;
pub use crate::primitives::errors::Mat2Error;

/// A 2x2 matrix of `f32` elements.
pub type Mat2F32 = Mat2<f32>;

/// A 2x2 matrix of `f64` elements.
pub type Mat2F64 = Mat2<f64>;
