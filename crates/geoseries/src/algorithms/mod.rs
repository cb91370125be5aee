//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core truncated-expansion loop. It operates on
//! pre-validated inputs and depends only on the math and primitives layers.

/// Truncated geometric expansion.
pub mod expansion;
