#![cfg(feature = "dev")]
//! Tests for term-sequence statistics.
//!
//! These tests verify the descriptive statistics derived from the expansion
//! term sequence:
//! - Mean, sample variance, and standard deviation
//! - The positional (unsorted) median, including the alternating-sign case
//! - Preconditions on empty and singleton sequences
//!
//! ## Test Organization
//!
//! 1. **Basic Moments** - Mean, variance, std dev on known sequences
//! 2. **Positional Median** - Odd, even, and unsorted orderings
//! 3. **Preconditions** - Empty and singleton failures
//! 4. **End-to-End** - Statistics from a real approximation run

use approx::assert_relative_eq;

use geoseries::internals::evaluation::statistics::SeriesStatistics;
use geoseries::internals::primitives::errors::SeriesError;
use geoseries::prelude::*;

// ============================================================================
// Basic Moments Tests
// ============================================================================

/// Test mean, variance, and std dev on a simple odd-length sequence.
///
/// terms = [1, 2, 3]: mean = 2, variance = (1 + 0 + 1) / 2 = 1, std = 1.
#[test]
fn test_moments_odd_sequence() {
    let terms = [1.0f64, 2.0, 3.0];
    let stats = SeriesStatistics::compute(&terms, 6.0).unwrap();

    assert_relative_eq!(stats.mean, 2.0, epsilon = 1e-12);
    assert_relative_eq!(stats.variance, 1.0, epsilon = 1e-12);
    assert_relative_eq!(stats.std_dev, 1.0, epsilon = 1e-12);
}

/// Test moments on an even-length sequence.
///
/// terms = [1, 2, 3, 4]: mean = 2.5,
/// variance = (2.25 + 0.25 + 0.25 + 2.25) / 3 = 5/3.
#[test]
fn test_moments_even_sequence() {
    let terms = [1.0f64, 2.0, 3.0, 4.0];
    let stats = SeriesStatistics::compute(&terms, 10.0).unwrap();

    assert_relative_eq!(stats.mean, 2.5, epsilon = 1e-12);
    assert_relative_eq!(stats.variance, 5.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(stats.std_dev, (5.0f64 / 3.0).sqrt(), epsilon = 1e-12);
}

/// Test that the std dev is always the square root of the variance.
#[test]
fn test_std_dev_is_sqrt_variance() {
    let terms = [1.0f64, 0.5, 0.25, 0.125, 0.0625];
    let sum: f64 = terms.iter().sum();
    let stats = SeriesStatistics::compute(&terms, sum).unwrap();

    assert_relative_eq!(stats.std_dev, stats.variance.sqrt(), epsilon = 1e-15);
}

// ============================================================================
// Positional Median Tests
// ============================================================================

/// Test the median of an odd-length sequence.
#[test]
fn test_median_odd() {
    let terms = [1.0f64, 2.0, 3.0];
    let stats = SeriesStatistics::compute(&terms, 6.0).unwrap();

    assert_relative_eq!(stats.median, 2.0, epsilon = 1e-12);
}

/// Test the median of an even-length sequence.
#[test]
fn test_median_even() {
    let terms = [1.0f64, 2.0, 3.0, 4.0];
    let stats = SeriesStatistics::compute(&terms, 10.0).unwrap();

    assert_relative_eq!(stats.median, 2.5, epsilon = 1e-12);
}

/// Test that the median is positional, not sorted.
///
/// For [3, 1, 2] a sorted median would be 2; the positional median is the
/// middle element of the sequence as given, 1.
#[test]
fn test_median_is_positional_not_sorted() {
    let terms = [3.0f64, 1.0, 2.0];
    let stats = SeriesStatistics::compute(&terms, 6.0).unwrap();

    assert_relative_eq!(stats.median, 1.0, epsilon = 1e-12);
}

/// Test the alternating-sign case produced by negative ratios.
///
/// For x = -0.5 the generation-order terms are [1, -0.5, 0.25, -0.125];
/// the positional median averages the two middle elements:
/// (-0.5 + 0.25) / 2 = -0.125.
#[test]
fn test_median_alternating_signs() {
    let terms = [1.0f64, -0.5, 0.25, -0.125];
    let sum: f64 = terms.iter().sum();
    let stats = SeriesStatistics::compute(&terms, sum).unwrap();

    assert_relative_eq!(stats.median, -0.125, epsilon = 1e-12);
}

// ============================================================================
// Precondition Tests
// ============================================================================

/// Test that an empty term sequence fails.
#[test]
fn test_empty_sequence_fails() {
    let err = SeriesStatistics::<f64>::compute(&[], 0.0).unwrap_err();
    assert_eq!(err, SeriesError::EmptyTermSequence);
}

/// Test that a singleton sequence fails.
///
/// The variance divisor n - 1 would be zero; the chosen policy is an
/// explicit error rather than a special-cased zero variance.
#[test]
fn test_singleton_sequence_fails() {
    let err = SeriesStatistics::compute(&[1.0f64], 1.0).unwrap_err();
    assert_eq!(err, SeriesError::TooFewTerms { got: 1, min: 2 });
}

/// Test the singleton policy through the public result path.
///
/// x = 0 records exactly one term, so statistics on that result must fail
/// the same way.
#[test]
fn test_singleton_via_public_api() {
    let model = GeometricSeries::new().epsilon(1e-6).build().unwrap();
    let result = model.approximate(0.0).unwrap();

    assert_eq!(result.term_count, 1);
    assert_eq!(
        result.statistics().unwrap_err(),
        SeriesError::TooFewTerms { got: 1, min: 2 }
    );
}

// ============================================================================
// End-to-End Tests
// ============================================================================

/// Test statistics derived from a real approximation run.
///
/// The mean must equal partial_sum / term_count exactly, since the same
/// accumulated sum is reused.
#[test]
fn test_statistics_from_run() {
    let model = GeometricSeries::new().epsilon(1e-6).build().unwrap();
    let result = model.approximate(0.5).unwrap();
    let stats = result.statistics().unwrap();

    assert_eq!(stats.mean, result.partial_sum / result.term_count as f64);
    assert!(stats.variance > 0.0);
    assert!(stats.std_dev > 0.0);

    // 20 terms: the positional median averages terms[9] and terms[10].
    // Terms decrease monotonically for 0 < x < 1, so this coincides with
    // the sorted median here.
    let expected = (0.5f64.powi(9) + 0.5f64.powi(10)) / 2.0;
    assert_relative_eq!(stats.median, expected, epsilon = 1e-15);
}

/// Test statistics for a negative ratio end to end.
#[test]
fn test_statistics_negative_ratio_run() {
    let model = GeometricSeries::new().epsilon(1e-3).build().unwrap();
    let result = model.approximate(-0.5).unwrap();

    // |(-0.5)^9| = 0.00195.. >= 1e-3 > |(-0.5)^10|, so 10 terms are summed.
    assert_eq!(result.term_count, 10);

    let stats = result.statistics().unwrap();
    let expected = (result.terms[4] + result.terms[5]) / 2.0;
    assert_relative_eq!(stats.median, expected, epsilon = 1e-15);
}
