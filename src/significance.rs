//! Two-proportion significance evaluation
//!
//! The central verdict: given both arms' counters, run a pooled two-proportion
//! z-test and package the p-value, winner, lift, and planning guidance into a
//! single [`TestResult`]. Every input produces a complete result. Sparse or
//! degenerate data yields an inconclusive verdict, never an error, so an
//! analysis pipeline upstream cannot be aborted by early data.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    BASELINE_RATE_FLOOR, DEFAULT_MINIMUM_DETECTABLE_EFFECT, DEFAULT_SIGNIFICANCE_LEVEL,
    DEFAULT_STATISTICAL_POWER, FALLBACK_SAMPLE_SIZE, MAX_CONFIDENCE_LEVEL, MIN_REPORTED_P_VALUE,
    Z_CRITICAL_95,
};
use crate::metrics::{MetricSelector, VariantMetrics};
use crate::normal;
use crate::sample_size::minimum_sample_size;

/// Which arm won, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
    Inconclusive,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::A => "a",
            Winner::B => "b",
            Winner::Inconclusive => "inconclusive",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of a two-variant significance evaluation
///
/// All fields are always populated. `days_remaining` is filled in by callers
/// that track run rate separately (see [`crate::run_rate`]); the evaluator
/// itself leaves it `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// p < 0.05, two-tailed
    pub is_significant: bool,
    /// (1 - p) * 100, clamped to [0, 99.9]
    pub confidence_level: f64,
    /// Two-tailed p-value, floored at 0.001 for reporting
    pub p_value: f64,
    /// Winning arm, `Inconclusive` unless the difference is significant
    pub winner: Winner,
    /// Relative change of B versus A, in percent, one decimal
    pub lift: f64,
    /// 95% interval around the lift, in percent, one decimal per bound
    pub lift_confidence_interval: (f64, f64),
    /// Minimum per-arm size to detect a 10% relative improvement
    pub sample_size_needed: u64,
    /// Projected days until `sample_size_needed` is reached, when known
    pub days_remaining: Option<u64>,
}

/// Round to one decimal place for display
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Canned verdict when one arm has no trials at all
fn no_trials_result() -> TestResult {
    TestResult {
        is_significant: false,
        confidence_level: 0.0,
        p_value: 1.0,
        winner: Winner::Inconclusive,
        lift: 0.0,
        lift_confidence_interval: (0.0, 0.0),
        sample_size_needed: FALLBACK_SAMPLE_SIZE,
        days_remaining: None,
    }
}

/// Canned verdict when the pooled proportion has no variance (all successes
/// or all failures across both arms)
fn no_variance_result() -> TestResult {
    TestResult {
        confidence_level: 50.0,
        ..no_trials_result()
    }
}

/// Evaluate a two-variant experiment with a pooled two-proportion z-test
///
/// `metric` selects which counter is the success signal; impressions are the
/// trials for both arms. The function is total: zero-trial and zero-variance
/// inputs produce fixed inconclusive verdicts instead of errors.
///
/// The lift confidence interval uses a simplified standard error on the rate
/// ratio and is not defined when either arm's rate is exactly zero; in that
/// case the interval bounds are non-finite. Callers rendering the interval
/// should check `is_finite()` on the bounds.
pub fn evaluate_significance(
    variant_a: &VariantMetrics,
    variant_b: &VariantMetrics,
    metric: MetricSelector,
) -> TestResult {
    let n_a = variant_a.impressions;
    let n_b = variant_b.impressions;

    if n_a == 0 || n_b == 0 {
        debug!(n_a, n_b, "no trials on at least one arm, returning inconclusive verdict");
        return no_trials_result();
    }

    let success_a = variant_a.success_count(metric);
    let success_b = variant_b.success_count(metric);

    let n_a = n_a as f64;
    let n_b = n_b as f64;
    let rate_a = success_a as f64 / n_a;
    let rate_b = success_b as f64 / n_b;

    let pooled = (success_a + success_b) as f64 / (n_a + n_b);
    let standard_error = (pooled * (1.0 - pooled) * (1.0 / n_a + 1.0 / n_b)).sqrt();

    if standard_error == 0.0 {
        debug!(pooled, "pooled proportion has no variance, returning inconclusive verdict");
        return no_variance_result();
    }

    let z = (rate_b - rate_a) / standard_error;
    let p = 2.0 * (1.0 - normal::cdf(z.abs()));

    let confidence_level = ((1.0 - p) * 100.0).clamp(0.0, MAX_CONFIDENCE_LEVEL);
    let is_significant = p < DEFAULT_SIGNIFICANCE_LEVEL;

    let winner = if is_significant {
        if rate_b > rate_a {
            Winner::B
        } else {
            Winner::A
        }
    } else {
        Winner::Inconclusive
    };

    let lift = if rate_a > 0.0 {
        round1((rate_b - rate_a) / rate_a * 100.0)
    } else {
        0.0
    };

    // Simplified standard error of the relative lift. Not defined when either
    // rate is zero: the division yields infinity and the bounds propagate it.
    let se_lift =
        ((1.0 - rate_a) / (n_a * rate_a) + (1.0 - rate_b) / (n_b * rate_b)).sqrt();
    let lift_confidence_interval = (
        round1((lift / 100.0 - Z_CRITICAL_95 * se_lift) * 100.0),
        round1((lift / 100.0 + Z_CRITICAL_95 * se_lift) * 100.0),
    );

    let sample_size_needed = minimum_sample_size(
        rate_a.max(BASELINE_RATE_FLOOR),
        DEFAULT_MINIMUM_DETECTABLE_EFFECT,
        DEFAULT_SIGNIFICANCE_LEVEL,
        DEFAULT_STATISTICAL_POWER,
    );

    debug!(z, p_value = p, %winner, "two-proportion z-test evaluated");

    TestResult {
        is_significant,
        confidence_level,
        p_value: p.max(MIN_REPORTED_P_VALUE),
        winner,
        lift,
        lift_confidence_interval,
        sample_size_needed,
        days_remaining: None,
    }
}
