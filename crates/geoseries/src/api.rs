//! High-level API for geometric-series approximation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the convergence threshold and iteration
//! cap, producing an immutable approximator that can be invoked any number of
//! times.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Pure**: The built approximator holds only configuration; every call is
//!   a pure function of its inputs, so concurrent use needs no synchronization.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SeriesBuilder`] via `GeometricSeries::new()`.
//! 2. Chain configuration methods (`.epsilon()`, `.max_iterations()`).
//! 3. Call `.build()` to validate and obtain a [`SeriesApproximator`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::expansion::expand;
use crate::engine::validator::Validator;
use crate::math::closed_form::closed_form;

// Publicly re-exported types
pub use crate::engine::output::ApproximationResult;
pub use crate::evaluation::sampling::{CurvePoint, SampleGrid};
pub use crate::evaluation::statistics::SeriesStatistics;
pub use crate::primitives::errors::SeriesError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a series approximator.
#[derive(Debug, Clone)]
pub struct SeriesBuilder<T> {
    /// Convergence threshold (default 1e-6).
    pub epsilon: Option<T>,

    /// Iteration cap (default 500).
    pub max_iterations: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SeriesBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SeriesBuilder<T> {
    /// Default convergence threshold.
    const DEFAULT_EPSILON: f64 = 1e-6;

    /// Default iteration cap.
    const DEFAULT_MAX_ITERATIONS: usize = 500;

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            epsilon: None,
            max_iterations: None,
            duplicate_param: None,
        }
    }

    /// Set the convergence threshold.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        if self.epsilon.is_some() {
            self.duplicate_param = Some("epsilon");
        }
        self.epsilon = Some(epsilon);
        self
    }

    /// Set the iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Validate the configuration and build the approximator.
    pub fn build(self) -> Result<SeriesApproximator<T>, SeriesError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let epsilon = self
            .epsilon
            .unwrap_or_else(|| T::from(Self::DEFAULT_EPSILON).unwrap_or_else(T::epsilon));
        let max_iterations = self.max_iterations.unwrap_or(Self::DEFAULT_MAX_ITERATIONS);

        // Validate epsilon
        Validator::validate_epsilon(epsilon)?;

        // Validate the iteration cap
        Validator::validate_max_iterations(max_iterations)?;

        Ok(SeriesApproximator {
            epsilon,
            max_iterations,
        })
    }
}

// ============================================================================
// Approximator
// ============================================================================

/// Configured truncated geometric-series approximator of `1/(1-x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesApproximator<T> {
    epsilon: T,
    max_iterations: usize,
}

impl<T: Float> SeriesApproximator<T> {
    /// Convergence threshold this approximator was built with.
    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// Iteration cap this approximator was built with.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Approximate `1/(1-x)` by summing terms until `|term| < epsilon` or
    /// the iteration cap is reached.
    ///
    /// Reaching the cap yields a partial result with `converged = false`,
    /// not an error.
    ///
    /// # Errors
    ///
    /// * [`SeriesError::NonFiniteRatio`] if `x` is NaN or infinite.
    /// * [`SeriesError::DivergentRatio`] if `|x| >= 1`.
    pub fn approximate(&self, x: T) -> Result<ApproximationResult<T>, SeriesError> {
        Validator::validate_ratio(x)?;

        let expansion = expand(x, self.epsilon, self.max_iterations);
        let term_count = expansion.terms.len();

        Ok(ApproximationResult {
            x,
            epsilon: self.epsilon,
            max_iterations: self.max_iterations,
            partial_sum: expansion.partial_sum,
            term_count,
            terms: expansion.terms,
            converged: expansion.converged,
        })
    }

    /// Sample the series against its closed form over a grid of ratios.
    ///
    /// Produces the raw data a plotting consumer renders as a comparison
    /// curve; no rendering happens here.
    pub fn sample(&self, grid: &SampleGrid<T>) -> Result<Vec<CurvePoint<T>>, SeriesError> {
        Validator::validate_grid(grid)?;

        let mut curve = Vec::with_capacity(grid.len());
        for x in grid.points() {
            let result = self.approximate(x)?;
            curve.push(CurvePoint {
                x,
                series: result.partial_sum,
                reference: closed_form(x),
            });
        }
        Ok(curve)
    }
}
