//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer derives read-only views from expansion output: descriptive
//! statistics over the term sequence and comparison-curve sampling grids.

/// Descriptive statistics over the term sequence.
pub mod statistics;

/// Comparison-curve sampling grids.
pub mod sampling;
