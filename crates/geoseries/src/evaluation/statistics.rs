//! Descriptive statistics over the series term sequence.
//!
//! ## Purpose
//!
//! This module computes the mean, variance, standard deviation, and median of
//! the terms recorded during a truncated expansion. It is a read-only view
//! derived on demand; nothing here is persisted.
//!
//! ## Design notes
//!
//! * **Sample variance**: Squared deviations from the mean are divided by
//!   `n - 1`, the convention downstream report consumers expect.
//! * **Positional median**: The median indexes into the generation-order
//!   sequence WITHOUT sorting. For 0 <= x < 1 the terms are already
//!   monotonically decreasing, so this coincides with the sorted median; for
//!   x < 0 the terms alternate in sign and it deliberately does not. This
//!   preserves the behavior consumers rely on rather than a conventional
//!   statistical median.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Mean**: `partial_sum / n`, the arithmetic mean of the terms.
//! * **Variance**: `sum (t_i - mean)^2 / (n - 1)`.
//! * **Median**: middle element for odd n; average of the two middle
//!   elements for even n, under generation-order indexing.
//!
//! ## Invariants
//!
//! * `std_dev == sqrt(variance)` and both are non-negative.
//! * Computation never mutates or reorders the input terms.
//!
//! ## Non-goals
//!
//! * This module does not perform the expansion.
//! * This module does not compute higher moments or robust statistics.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SeriesError;

// ============================================================================
// Statistics Structure
// ============================================================================

/// Descriptive statistics derived from a term sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStatistics<T> {
    /// Arithmetic mean of the terms.
    pub mean: T,

    /// Sample variance of the terms (divisor n - 1).
    pub variance: T,

    /// Standard deviation, `sqrt(variance)`.
    pub std_dev: T,

    /// Positional median over the generation-order sequence.
    pub median: T,
}

impl<T: Float> SeriesStatistics<T> {
    /// Minimum number of terms required (variance divides by n - 1).
    const MIN_TERMS: usize = 2;

    // ========================================================================
    // Main Computation
    // ========================================================================

    /// Compute statistics over a term sequence and its precomputed sum.
    ///
    /// `partial_sum` must be the sum of `terms` in generation order; passing
    /// the accumulated sum from the expansion keeps the mean bit-identical to
    /// what the expansion produced.
    ///
    /// # Errors
    ///
    /// * [`SeriesError::EmptyTermSequence`] if `terms` is empty.
    /// * [`SeriesError::TooFewTerms`] if fewer than two terms were recorded,
    ///   since the variance divisor `n - 1` would be zero.
    pub fn compute(terms: &[T], partial_sum: T) -> Result<Self, SeriesError> {
        let n = terms.len();
        if n == 0 {
            return Err(SeriesError::EmptyTermSequence);
        }
        if n < Self::MIN_TERMS {
            return Err(SeriesError::TooFewTerms {
                got: n,
                min: Self::MIN_TERMS,
            });
        }

        let n_t = T::from(n).unwrap_or(T::one());
        let mean = partial_sum / n_t;

        let sum_sq_dev = terms.iter().fold(T::zero(), |acc, &t| {
            let d = t - mean;
            acc + d * d
        });
        let variance = sum_sq_dev / (n_t - T::one());
        let std_dev = variance.sqrt();

        Ok(Self {
            mean,
            variance,
            std_dev,
            median: Self::positional_median(terms),
        })
    }

    // ========================================================================
    // Median
    // ========================================================================

    /// Median by position in the unsorted generation-order sequence.
    fn positional_median(terms: &[T]) -> T {
        let n = terms.len();
        let mid = n / 2;

        if n % 2 != 0 {
            terms[mid]
        } else {
            let two = T::one() + T::one();
            (terms[mid - 1] + terms[mid]) / two
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SeriesStatistics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Series Statistics:")?;
        writeln!(f, "  Mean:     {:.6}", self.mean)?;
        writeln!(f, "  Variance: {:.6}", self.variance)?;
        writeln!(f, "  Std Dev:  {:.6}", self.std_dev)?;
        writeln!(f, "  Median:   {:.6}", self.median)?;
        Ok(())
    }
}
