//! Comparison-curve sampling grids.
//!
//! ## Purpose
//!
//! This module defines the grid a plotting consumer samples the approximator
//! over, and the per-point record pairing the truncated sum with the
//! closed-form reference. It produces pure data; rendering is a consumer
//! concern.
//!
//! ## Design notes
//!
//! * **Index-stepped**: Points are computed as `start + step * i` rather than
//!   by accumulating floats, so the grid has a fixed, predictable length.
//! * **Domain-bounded**: The default grid spans (-0.99, 0.99) in steps of
//!   0.01, the densest symmetric grid inside the convergence domain at that
//!   resolution.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `len() >= 1` for any validated grid.
//! * `point(0) == start` and `point(len() - 1) <= stop` up to rounding.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the series (the API layer does).
//! * This module does not render or persist anything.

// External dependencies
use num_traits::Float;

// ============================================================================
// Sampling Grid
// ============================================================================

/// Evenly spaced grid of ratios to sample the approximator over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid<T> {
    /// First ratio sampled.
    pub start: T,

    /// Last ratio sampled (inclusive, up to step rounding).
    pub stop: T,

    /// Spacing between consecutive ratios.
    pub step: T,
}

impl<T: Float> Default for SampleGrid<T> {
    /// The conventional comparison grid: -0.99 to 0.99 in steps of 0.01.
    fn default() -> Self {
        Self {
            start: T::from(-0.99).unwrap_or_else(|| T::zero() - T::one()),
            stop: T::from(0.99).unwrap_or_else(T::one),
            step: T::from(0.01).unwrap_or_else(T::one),
        }
    }
}

impl<T: Float> SampleGrid<T> {
    /// Create a grid from explicit bounds and spacing.
    ///
    /// Bounds are not checked here; the engine validator runs before
    /// sampling.
    pub fn new(start: T, stop: T, step: T) -> Self {
        Self { start, stop, step }
    }

    /// Number of points on the grid.
    pub fn len(&self) -> usize {
        let span = (self.stop - self.start) / self.step;
        span.round().to_usize().unwrap_or(0) + 1
    }

    /// Whether the grid is degenerate (cannot happen after validation).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The i-th ratio on the grid, clamped so rounding never overshoots `stop`.
    pub fn point(&self, index: usize) -> T {
        let p = self.start + self.step * T::from(index).unwrap_or_else(T::zero);
        if p > self.stop {
            self.stop
        } else {
            p
        }
    }

    /// Iterate over the grid ratios in ascending order.
    pub fn points(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }
}

// ============================================================================
// Curve Point
// ============================================================================

/// One sampled point of the series-versus-reference comparison curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint<T> {
    /// Ratio the series was evaluated at.
    pub x: T,

    /// Truncated series sum at `x`.
    pub series: T,

    /// Closed-form reference `1/(1-x)`.
    pub reference: T,
}
