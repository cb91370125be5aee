//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer provides input validation and the public result types that the
//! API assembles. It sits above the math, algorithms, and evaluation layers.

/// Input validation for configuration and arguments.
pub mod validator;

/// Result types for approximation runs.
pub mod output;
