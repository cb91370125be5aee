//! Output types for series approximation runs.
//!
//! ## Purpose
//!
//! This module defines the `ApproximationResult` struct which encapsulates
//! the outcome of one truncated-expansion run: the partial sum, the recorded
//! term sequence, and convergence metadata.
//!
//! ## Design notes
//!
//! * **Immutable**: A result is produced once per request and never mutated.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Convergence**: `converged` is true when the loop stopped because the
//!   newest term dropped below epsilon, false when the cap was exhausted.
//! * **Reference value**: `1/(1-x)` is computed on demand for comparison; the
//!   expansion itself never consults it.
//!
//! ## Invariants
//!
//! * `term_count == terms.len()` and `term_count <= max_iterations`.
//! * `partial_sum` equals the sum of `terms` in generation order.
//! * Terms appear in generation order (`x^0, x^1, ...`).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond derived conveniences.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::statistics::SeriesStatistics;
use crate::math::closed_form::closed_form;
use crate::primitives::errors::SeriesError;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of one truncated geometric-series approximation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximationResult<T> {
    /// Series ratio the expansion was evaluated at.
    pub x: T,

    /// Convergence threshold used for this run.
    pub epsilon: T,

    /// Iteration cap used for this run.
    pub max_iterations: usize,

    /// Truncated series sum approximating `1/(1-x)`.
    pub partial_sum: T,

    /// Number of terms summed.
    pub term_count: usize,

    /// Terms in generation order (`x^0, x^1, ...`).
    pub terms: Vec<T>,

    /// Whether the loop stopped due to `|term| < epsilon` rather than the cap.
    pub converged: bool,
}

impl<T: Float> ApproximationResult<T> {
    // ========================================================================
    // Derived Values
    // ========================================================================

    /// Closed-form reference value `1/(1-x)` for this run's argument.
    pub fn reference(&self) -> T {
        closed_form(self.x)
    }

    /// Absolute deviation of the partial sum from the closed form.
    pub fn absolute_error(&self) -> T {
        (self.partial_sum - self.reference()).abs()
    }

    /// Descriptive statistics over the recorded term sequence.
    ///
    /// Fails when fewer than two terms were recorded; see
    /// [`SeriesStatistics::compute`].
    pub fn statistics(&self) -> Result<SeriesStatistics<T>, SeriesError> {
        SeriesStatistics::compute(&self.terms, self.partial_sum)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for ApproximationResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Ratio:       {}", self.x)?;
        writeln!(f, "  Epsilon:     {}", self.epsilon)?;
        writeln!(f, "  Terms:       {}", self.term_count)?;
        writeln!(
            f,
            "  Converged:   {}",
            if self.converged { "yes" } else { "no" }
        )?;
        writeln!(f, "  Partial sum: {:.6}", self.partial_sum)?;
        writeln!(f, "  Reference:   {:.6}", self.reference())?;
        writeln!(f)?;

        writeln!(f, "Terms:")?;
        writeln!(f, "{:>6} {:>14}", "k", "x^k")?;
        writeln!(f, "{:-<21}", "")?;

        // Show first 10 and last 10 terms if more than 20
        let n = self.terms.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>6}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>6} {:>14.8}", idx, self.terms[idx])?;
        }

        Ok(())
    }
}
