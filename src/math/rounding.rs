//! Fixed-precision rounding for approximate comparisons and display.
//!
//! ## Purpose
//!
//! This module provides the three-decimal-place rounding shared by every
//! approximate question the matrix type answers: identity checks,
//! invertibility checks, and display formatting.
//!
//! ## Design notes
//!
//! * **Formula**: `round(x * 1000) / 1000`, using the platform float
//!   `round` (ties away from zero).
//! * **Why round at all**: exact float comparison near zero would report a
//!   singular matrix as invertible because of accumulated noise. Rounding
//!   first gives comparisons a fixed, predictable tolerance.
//!
//! ## Invariants
//!
//! * `round_thousandths(x) == x` for any `x` already at three decimals of
//!   precision (up to float representability).
//! * NaN and infinities pass through unchanged.
//!
//! ## Non-goals
//!
//! * This module does not provide configurable precision.
//! * This module does not implement banker's rounding.

// External dependencies
use num_traits::Float;

// ============================================================================
// Rounding
// ============================================================================

/// Round a value to three decimal places.
///
/// # Formula
///
/// ```text
/// round(x * 1000) / 1000
/// ```
#[inline]
pub fn round_thousandths<T: Float>(value: T) -> T {
    let scale = T::from(1000.0).unwrap();
    (value * scale).round() / scale
}

/// True if a value rounds to zero at three decimal places.
///
/// Anything with magnitude below 0.0005 counts as zero.
#[inline]
pub fn rounds_to_zero<T: Float>(value: T) -> bool {
    round_thousandths(value) == T::zero()
}
