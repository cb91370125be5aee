//! Input validation for series configuration and arguments.
//!
//! ## Purpose
//!
//! This module provides validation functions for approximator configuration
//! and per-call arguments. It checks domain requirements (|x| < 1), parameter
//! bounds, and statistics preconditions.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Domain**: The expansion converges only for finite |x| < 1.
//! * **Parameter Bounds**: Epsilon must be positive and finite; the iteration
//!   cap must be at least 1.
//! * **Grid Bounds**: Every sampled point must lie inside the domain.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not perform the expansion or the statistics.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not re-prompt; retry loops belong to interactive callers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::sampling::SampleGrid;
use crate::primitives::errors::SeriesError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for series configuration and input arguments.
///
/// Provides static methods returning `Result<(), SeriesError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Argument Validation
    // ========================================================================

    /// Validate the series ratio (the argument x).
    pub fn validate_ratio<T: Float>(x: T) -> Result<(), SeriesError> {
        if !x.is_finite() {
            return Err(SeriesError::NonFiniteRatio(x.to_f64().unwrap_or(f64::NAN)));
        }
        if x.abs() >= T::one() {
            return Err(SeriesError::DivergentRatio(x.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the convergence threshold.
    pub fn validate_epsilon<T: Float>(epsilon: T) -> Result<(), SeriesError> {
        if !epsilon.is_finite() || epsilon <= T::zero() {
            return Err(SeriesError::InvalidEpsilon(
                epsilon.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), SeriesError> {
        if max_iterations == 0 {
            return Err(SeriesError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    // ========================================================================
    // Grid Validation
    // ========================================================================

    /// Validate a comparison-curve sampling grid.
    pub fn validate_grid<T: Float>(grid: &SampleGrid<T>) -> Result<(), SeriesError> {
        let (start, stop, step) = (grid.start, grid.stop, grid.step);

        if !start.is_finite() || !stop.is_finite() || !step.is_finite() {
            return Err(SeriesError::InvalidGrid(format!(
                "non-finite bound or step: start={}, stop={}, step={}",
                start.to_f64().unwrap_or(f64::NAN),
                stop.to_f64().unwrap_or(f64::NAN),
                step.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if step <= T::zero() {
            return Err(SeriesError::InvalidGrid(format!(
                "step must be positive, got {}",
                step.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if start > stop {
            return Err(SeriesError::InvalidGrid(format!(
                "start {} exceeds stop {}",
                start.to_f64().unwrap_or(f64::NAN),
                stop.to_f64().unwrap_or(f64::NAN)
            )));
        }
        // Every grid point must lie inside the convergence domain.
        if start.abs() >= T::one() || stop.abs() >= T::one() {
            return Err(SeriesError::InvalidGrid(format!(
                "bounds must satisfy |x| < 1, got [{}, {}]",
                start.to_f64().unwrap_or(f64::NAN),
                stop.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SeriesError> {
        if let Some(parameter) = duplicate_param {
            return Err(SeriesError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
