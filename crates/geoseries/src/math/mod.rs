//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions: the closed-form reference
//! for the geometric series and the analytic truncation-error bound. It
//! depends only on the primitives layer.

/// Closed-form reference value and truncation bound.
pub mod closed_form;
