//! Error types for series approximation operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during geometric
//! series approximation and term-sequence statistics, including argument
//! validation, statistics preconditions, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., the ratio given).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Domain validation**: The expansion only converges for |x| < 1.
//! 2. **Parameter validation**: Epsilon and the iteration cap have hard bounds.
//! 3. **Statistics preconditions**: Variance requires at least two terms.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for series approximation operations.
///
/// Every variant is an invalid-argument condition; the core performs no I/O
/// and has no resource-acquisition failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// The expansion of 1/(1-x) diverges for |x| >= 1.
    DivergentRatio(f64),

    /// The ratio is NaN or infinite.
    NonFiniteRatio(f64),

    /// The convergence threshold must be positive and finite.
    InvalidEpsilon(f64),

    /// The iteration cap must be at least 1.
    InvalidMaxIterations(usize),

    /// Statistics were requested over an empty term sequence.
    EmptyTermSequence,

    /// Too few terms for the requested statistic (variance divides by n - 1).
    TooFewTerms {
        /// Number of terms available.
        got: usize,
        /// Minimum required terms.
        min: usize,
    },

    /// Sampling grid is malformed (bounds, step, or ordering).
    InvalidGrid(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SeriesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DivergentRatio(x) => {
                write!(f, "Divergent ratio: {x} (series requires |x| < 1)")
            }
            Self::NonFiniteRatio(x) => write!(f, "Non-finite ratio: {x}"),
            Self::InvalidEpsilon(eps) => {
                write!(f, "Invalid epsilon: {eps} (must be > 0 and finite)")
            }
            Self::InvalidMaxIterations(n) => {
                write!(f, "Invalid max_iterations: {n} (must be at least 1)")
            }
            Self::EmptyTermSequence => write!(f, "Term sequence is empty"),
            Self::TooFewTerms { got, min } => {
                write!(f, "Too few terms: got {got}, need at least {min}")
            }
            Self::InvalidGrid(msg) => write!(f, "Invalid sampling grid: {msg}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SeriesError {}
