//! Closed-form reference for the geometric series.
//!
//! ## Purpose
//!
//! This module provides the exact value the truncated expansion approximates,
//! `1/(1-x)`, together with the analytic bound on the error committed by
//! truncating the series after a given number of terms.
//!
//! ## Key concepts
//!
//! * **Closed form**: for |x| < 1, `sum x^k (k = 0..inf) = 1/(1-x)`.
//! * **Truncation bound**: the tail after n terms is `x^n / (1-x)`, so its
//!   magnitude is at most `|x|^n / (1 - |x|)`.
//!
//! ## Invariants
//!
//! * Both functions assume |x| < 1; callers validate before invoking.
//!
//! ## Non-goals
//!
//! * This module does not compute the truncated expansion itself.
//! * This module does not validate its arguments.

// External dependencies
use num_traits::Float;

/// Exact value of the series limit, `1/(1-x)`.
///
/// The approximator never consults this internally; it exists so callers and
/// tests can compare a partial sum against the true value.
#[inline]
pub fn closed_form<T: Float>(x: T) -> T {
    T::one() / (T::one() - x)
}

/// Magnitude bound on the error of an `n`-term partial sum.
///
/// The discarded tail is `x^n + x^(n+1) + ...= x^n / (1-x)`, bounded in
/// magnitude by `|x|^n / (1 - |x|)`.
#[inline]
pub fn truncation_bound<T: Float>(x: T, n: usize) -> T {
    let a = x.abs();
    a.powi(n as i32) / (T::one() - a)
}
