//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure scalar functions used by the matrix type:
//! fixed-precision rounding for approximate comparisons and display.
//!
//! These are reusable mathematical building blocks with no matrix-specific
//! logic.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Matrix
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fixed-precision (three decimal place) rounding.
pub mod rounding;
