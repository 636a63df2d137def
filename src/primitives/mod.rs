//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational types the rest of the crate builds
//! on. For a single value type, that is just the error enum.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Matrix
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for fallible matrix operations.
pub mod errors;
