#![cfg(feature = "dev")]
//! Tests for the truncated expansion loop.
//!
//! These tests verify the core summation semantics on pre-validated inputs:
//! - Term recurrence and generation order
//! - Convergence and cap-exhaustion stopping conditions
//! - Partial-sum consistency with the recorded terms
//!
//! ## Test Organization
//!
//! 1. **Term Generation** - Recurrence and ordering
//! 2. **Stopping Conditions** - Epsilon and iteration cap
//! 3. **Consistency** - Sum equals the recorded terms

use approx::assert_relative_eq;

use geoseries::internals::algorithms::expansion::expand;

// ============================================================================
// Term Generation Tests
// ============================================================================

/// Test that terms are successive powers of the ratio in generation order.
#[test]
fn test_terms_are_successive_powers() {
    let out = expand(0.5f64, 1e-3, 500);

    for (k, &term) in out.terms.iter().enumerate() {
        assert_relative_eq!(term, 0.5f64.powi(k as i32), epsilon = 1e-15);
    }
}

/// Test that negative ratios alternate in sign.
#[test]
fn test_negative_ratio_alternates() {
    let out = expand(-0.5f64, 1e-3, 500);

    for (k, &term) in out.terms.iter().enumerate() {
        assert_relative_eq!(term, (-0.5f64).powi(k as i32), epsilon = 1e-15);
    }
    assert!(out.terms[0] > 0.0);
    assert!(out.terms[1] < 0.0);
}

/// Test the zero ratio.
///
/// The first term (1) is summed; the next term (0) is below any positive
/// epsilon, so the loop records exactly one term.
#[test]
fn test_zero_ratio_single_term() {
    let out = expand(0.0f64, 1e-6, 500);

    assert_eq!(out.terms, vec![1.0]);
    assert_eq!(out.partial_sum, 1.0);
    assert!(out.converged);
}

// ============================================================================
// Stopping Condition Tests
// ============================================================================

/// Test that every recorded term is at least epsilon in magnitude.
#[test]
fn test_recorded_terms_at_least_epsilon() {
    let eps = 1e-4;
    let out = expand(0.8f64, eps, 500);

    assert!(out.converged);
    for &term in &out.terms {
        assert!(term.abs() >= eps);
    }
}

/// Test that an epsilon above 1 records no terms.
#[test]
fn test_epsilon_above_one_records_nothing() {
    let out = expand(0.5f64, 2.0, 500);

    assert!(out.terms.is_empty());
    assert_eq!(out.partial_sum, 0.0);
    assert!(out.converged);
}

/// Test cap exhaustion.
///
/// An unreachably small epsilon forces the loop to stop at the cap with
/// `converged = false`.
#[test]
fn test_cap_exhaustion() {
    let out = expand(0.9f64, 1e-300, 25);

    assert_eq!(out.terms.len(), 25);
    assert!(!out.converged);
}

/// Test that a cap of 1 records exactly the leading term.
#[test]
fn test_cap_of_one() {
    let out = expand(0.9f64, 1e-6, 1);

    assert_eq!(out.terms, vec![1.0]);
    assert_eq!(out.partial_sum, 1.0);
    assert!(!out.converged);
}

// ============================================================================
// Consistency Tests
// ============================================================================

/// Test that the partial sum equals the sum of the recorded terms.
#[test]
fn test_partial_sum_matches_terms() {
    for &x in &[0.3f64, 0.9, -0.3, -0.9] {
        let out = expand(x, 1e-8, 500);
        let resummed: f64 = out.terms.iter().sum();

        assert_eq!(out.partial_sum, resummed, "x={x}");
    }
}

/// Test determinism of the raw loop.
#[test]
fn test_expand_deterministic() {
    let a = expand(0.123f64, 1e-9, 500);
    let b = expand(0.123f64, 1e-9, 500);

    assert_eq!(a, b);
}
