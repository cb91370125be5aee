//! Truncated geometric expansion of 1/(1-x).
//!
//! ## Purpose
//!
//! This module implements the core summation loop: generate successive powers
//! of the ratio, accumulate them into a partial sum, and stop once the newest
//! term drops below the convergence threshold or the iteration cap is reached.
//!
//! ## Design notes
//!
//! * **Pre-validated**: Inputs are validated by the engine before this runs.
//! * **Bounded**: The loop executes at most `max_iterations` times.
//! * **Deterministic**: Identical inputs produce bit-identical output.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Term recurrence**: `term_0 = 1`, `term_(k+1) = term_k * x`.
//! * **Convergence**: stopping because `|term| < epsilon` rather than
//!   because the iteration cap was exhausted.
//! * **Generation order**: terms are recorded in the order they are summed;
//!   downstream statistics rely on this ordering.
//!
//! ## Invariants
//!
//! * `terms.len() == term_count <= max_iterations`.
//! * `partial_sum` equals the sum of the recorded terms.
//! * Exhausting the cap is a partial result, never an error.
//!
//! ## Non-goals
//!
//! * This module does not validate its arguments.
//! * This module does not compute the closed-form reference.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Expansion State
// ============================================================================

/// Raw output of the expansion loop, before packaging into a result.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion<T> {
    /// Terms in generation order (`x^0, x^1, ...`).
    pub terms: Vec<T>,

    /// Running total of the recorded terms.
    pub partial_sum: T,

    /// Whether the loop stopped because `|term| < epsilon`.
    pub converged: bool,
}

// ============================================================================
// Expansion Loop
// ============================================================================

/// Sum the geometric series at `x` until `|term| < epsilon` or the cap.
///
/// A term is recorded only while its magnitude is at least `epsilon`, so an
/// epsilon greater than 1 legitimately produces an empty term sequence with a
/// partial sum of zero.
pub fn expand<T: Float>(x: T, epsilon: T, max_iterations: usize) -> Expansion<T> {
    let mut terms = Vec::new();
    let mut partial_sum = T::zero();
    let mut term = T::one();
    let mut n = 0;

    while term.abs() >= epsilon && n < max_iterations {
        partial_sum = partial_sum + term;
        terms.push(term);
        n += 1;
        term = term * x;
    }

    Expansion {
        terms,
        partial_sum,
        converged: term.abs() < epsilon,
    }
}
