//! Documented constants for the inference engine
//!
//! This module contains the fixed statistical parameters with justification
//! for their values. Centralizing constants prevents magic numbers and makes
//! tuning easier.

// =============================================================================
// HYPOTHESIS TEST PARAMETERS
// =============================================================================

/// Significance level for the two-tailed test (p < 0.05)
///
/// Justification:
/// - 0.05 is the conventional threshold for product experimentation
/// - Two-tailed: a regression matters as much as an improvement
/// - Callers that need a stricter bar can compare `p_value` themselves
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Target statistical power for sample-size planning (80%)
///
/// Justification:
/// - 80% power is the standard planning target; pushing to 90% roughly
///   doubles the required sample for small effects
/// - A 20% false-negative rate is acceptable for iterative product tests
pub const DEFAULT_STATISTICAL_POWER: f64 = 0.80;

/// Minimum detectable effect used when reporting `sample_size_needed` (10%)
///
/// A 10% relative improvement is the smallest change worth acting on for
/// most conversion funnels. Smaller effects need impractically large samples.
pub const DEFAULT_MINIMUM_DETECTABLE_EFFECT: f64 = 0.10;

/// Critical z value for the 95% lift confidence interval
pub const Z_CRITICAL_95: f64 = 1.96;

// =============================================================================
// SAMPLE SIZE BOUNDS
// =============================================================================

/// Floor for any sample-size recommendation
///
/// Justification:
/// - Below ~100 observations per arm the normal approximation to the
///   binomial is unreliable regardless of what the formula says
/// - Prevents absurdly small recommendations when the detectable effect
///   is large
pub const MIN_SAMPLE_SIZE: u64 = 100;

/// Fallback recommendation when the baseline rate is outside (0, 1)
///
/// With no usable baseline the formula is undefined. 10,000 per arm is a
/// conservative default that covers baselines down to roughly 1%.
pub const FALLBACK_SAMPLE_SIZE: u64 = 10_000;

/// Clamp range for the target proportion in the sample-size formula
///
/// Keeps `p2(1-p2)` and the rate difference numerically stable when the
/// baseline sits near either boundary.
pub const TARGET_RATE_MIN: f64 = 0.01;
pub const TARGET_RATE_MAX: f64 = 0.99;

/// Floor applied to the observed baseline before planning a follow-up size
///
/// A measured rate of exactly zero would trigger the fallback path even
/// when the arm simply has not converted yet; 1% keeps the estimate useful.
pub const BASELINE_RATE_FLOOR: f64 = 0.01;

// =============================================================================
// REPORTING BOUNDS
// =============================================================================

/// Smallest p-value ever reported (never exactly 0)
///
/// Reporting p = 0 would imply a certainty the approximation cannot deliver.
pub const MIN_REPORTED_P_VALUE: f64 = 0.001;

/// Cap on the reported confidence level, in percent
///
/// Mirrors [`MIN_REPORTED_P_VALUE`]: confidence is (1 - p) * 100 and is
/// never shown as a flat 100%.
pub const MAX_CONFIDENCE_LEVEL: f64 = 99.9;
