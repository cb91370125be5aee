//! # geoseries — Truncated Geometric-Series Approximation for Rust
//!
//! A small, `no_std`-capable library that approximates the closed-form
//! function `1/(1-x)` by summing its geometric series until the newest term
//! drops below a configurable threshold, and derives descriptive statistics
//! over the summed term sequence.
//!
//! ## What does it compute?
//!
//! For `|x| < 1`, the geometric series `1 + x + x^2 + ...` converges to
//! `1/(1-x)`. The approximator sums terms while their magnitude is at least
//! `epsilon` (and an iteration cap has not been hit), reporting the partial
//! sum, the number of terms summed, the ordered term sequence, and whether
//! the run converged. A statistics view derives the mean, sample variance,
//! standard deviation, and positional median of that term sequence.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use geoseries::prelude::*;
//!
//! // Build the approximator
//! let model = GeometricSeries::new()
//!     .epsilon(1e-6)       // Stop once |term| < 1e-6
//!     .max_iterations(500) // Hard cap on summed terms
//!     .build()?;
//!
//! // Approximate 1/(1 - 0.5) = 2
//! let result = model.approximate(0.5_f64)?;
//!
//! assert!(result.converged);
//! assert_eq!(result.term_count, 20);
//! assert!((result.partial_sum - 2.0).abs() < 1e-5);
//!
//! println!("{}", result);
//! # Result::<(), SeriesError>::Ok(())
//! ```
//!
//! ### Term-Sequence Statistics
//!
//! ```rust
//! use geoseries::prelude::*;
//!
//! let model = GeometricSeries::new().epsilon(1e-6).build()?;
//! let result = model.approximate(0.5)?;
//!
//! let stats = result.statistics()?;
//! println!("{}", stats);
//! # Result::<(), SeriesError>::Ok(())
//! ```
//!
//! ### Comparison-Curve Sampling
//!
//! Sample the truncated sum against the closed form over a grid, ready for a
//! plotting consumer:
//!
//! ```rust
//! use geoseries::prelude::*;
//!
//! let model = GeometricSeries::new().epsilon(1e-6).build()?;
//!
//! // Default grid: -0.99 to 0.99 in steps of 0.01
//! let curve = model.sample(&SampleGrid::default())?;
//! assert_eq!(curve.len(), 199);
//! # Result::<(), SeriesError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `approximate` returns `Result<ApproximationResult<T>, SeriesError>`; the
//! `?` operator is idiomatic:
//!
//! ```rust
//! use geoseries::prelude::*;
//!
//! let model = GeometricSeries::new().build()?;
//!
//! match model.approximate(1.5) {
//!     Ok(result) => println!("sum = {}", result.partial_sum),
//!     Err(e) => eprintln!("approximation failed: {}", e),
//! }
//! # Result::<(), SeriesError>::Ok(())
//! ```
//!
//! Exhausting the iteration cap is not an error: the partial result is
//! returned with `converged = false`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! geoseries = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the truncated expansion loop.
mod algorithms;

// Layer 4: Evaluation - statistics and sampling grids.
mod evaluation;

// Layer 5: Engine - validation and output types.
mod engine;

// High-level fluent API.
mod api;

// Standard geoseries prelude.
pub mod prelude {
    pub use crate::api::{
        ApproximationResult, CurvePoint, SampleGrid, SeriesApproximator,
        SeriesBuilder as GeometricSeries, SeriesError, SeriesStatistics,
    };
    pub use crate::math::closed_form::{closed_form, truncation_bound};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
