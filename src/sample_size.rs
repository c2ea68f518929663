//! Sample-size planning and power estimation
//!
//! Two-proportion planning: how many observations each arm needs before a
//! relative effect of a given size becomes detectable, and how much power a
//! running test has already accumulated.

use tracing::debug;

use crate::constants::{
    DEFAULT_SIGNIFICANCE_LEVEL, FALLBACK_SAMPLE_SIZE, MIN_SAMPLE_SIZE, TARGET_RATE_MAX,
    TARGET_RATE_MIN,
};
use crate::metrics::{MetricSelector, VariantMetrics};
use crate::normal;

/// Minimum per-arm sample size to detect a relative effect
///
/// `minimum_detectable_effect` is relative: 0.10 means "detect a 10%
/// improvement over the baseline rate". Uses the standard two-proportion
/// formula
///
/// ```text
/// n = (z_alpha + z_beta)^2 * (p1(1-p1) + p2(1-p2)) / (p2 - p1)^2
/// ```
///
/// Degenerate baselines (outside the open interval (0, 1)) return the fixed
/// fallback of 10,000 rather than erroring, and the result is floored at 100
/// observations per arm.
pub fn minimum_sample_size(
    baseline_rate: f64,
    minimum_detectable_effect: f64,
    alpha: f64,
    power: f64,
) -> u64 {
    if baseline_rate <= 0.0 || baseline_rate >= 1.0 {
        debug!(baseline_rate, "baseline outside (0, 1), returning fallback sample size");
        return FALLBACK_SAMPLE_SIZE;
    }

    let p1 = baseline_rate;
    let p2 = (p1 * (1.0 + minimum_detectable_effect)).clamp(TARGET_RATE_MIN, TARGET_RATE_MAX);

    let z_alpha = normal::inverse_cdf(1.0 - alpha / 2.0);
    let z_beta = normal::inverse_cdf(power);

    let pooled_variance = p1 * (1.0 - p1) + p2 * (1.0 - p2);
    let n = (z_alpha + z_beta).powi(2) * pooled_variance / (p2 - p1).powi(2);

    n.max(MIN_SAMPLE_SIZE as f64).ceil() as u64
}

/// Observed statistical power of a running two-arm test
///
/// Estimates the probability that a test of this size would detect the rate
/// difference currently measured, treating the observed rates as the true
/// ones. Uses Cohen's h as the effect size and the harmonic mean of the two
/// arm sizes:
///
/// ```text
/// power = Phi(h * sqrt(n_eff / 2) - z_alpha/2)
/// ```
///
/// Returns 0.0 when either arm has no impressions. The result is clamped to
/// [0, 1].
pub fn achieved_power(
    variant_a: &VariantMetrics,
    variant_b: &VariantMetrics,
    metric: MetricSelector,
) -> f64 {
    if variant_a.impressions == 0 || variant_b.impressions == 0 {
        return 0.0;
    }

    let n_a = variant_a.impressions as f64;
    let n_b = variant_b.impressions as f64;
    let rate_a = variant_a.success_rate(metric);
    let rate_b = variant_b.success_rate(metric);

    // Cohen's h via the arcsine variance-stabilizing transform
    let h = 2.0 * (rate_b.sqrt().asin() - rate_a.sqrt().asin());

    // Harmonic-mean effective sample size for unequal arms
    let n_eff = 2.0 / (1.0 / n_a + 1.0 / n_b);

    let z_alpha = normal::inverse_cdf(1.0 - DEFAULT_SIGNIFICANCE_LEVEL / 2.0);
    let power = normal::cdf(h.abs() * (n_eff / 2.0).sqrt() - z_alpha);

    power.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planner_matches_the_textbook_scenario() {
        // 10% baseline, 10% relative lift, alpha 0.05, power 0.80:
        // the closed form lands near 14,750 per arm
        let n = minimum_sample_size(0.10, 0.10, 0.05, 0.80);
        assert!((14_013..=15_487).contains(&n), "n = {n}");
    }

    #[test]
    fn planner_falls_back_on_degenerate_baselines() {
        assert_eq!(minimum_sample_size(0.0, 0.10, 0.05, 0.80), 10_000);
        assert_eq!(minimum_sample_size(-0.2, 0.10, 0.05, 0.80), 10_000);
        assert_eq!(minimum_sample_size(1.0, 0.10, 0.05, 0.80), 10_000);
        assert_eq!(minimum_sample_size(1.7, 0.10, 0.05, 0.80), 10_000);
    }

    #[test]
    fn planner_never_recommends_below_the_floor() {
        // Huge detectable effect would otherwise need a handful of samples
        let n = minimum_sample_size(0.30, 2.0, 0.05, 0.80);
        assert!(n >= 100);
    }

    #[test]
    fn power_grows_with_sample_size() {
        let small_a = VariantMetrics { impressions: 1000, conversions: 100, ..Default::default() };
        let small_b = VariantMetrics { impressions: 1000, conversions: 130, ..Default::default() };
        let large_a = VariantMetrics { impressions: 4000, conversions: 400, ..Default::default() };
        let large_b = VariantMetrics { impressions: 4000, conversions: 520, ..Default::default() };

        let p_small = achieved_power(&small_a, &small_b, MetricSelector::Conversions);
        let p_large = achieved_power(&large_a, &large_b, MetricSelector::Conversions);

        assert!(p_large > p_small, "power did not grow: {p_small} -> {p_large}");
        assert!((0.0..=1.0).contains(&p_small));
        assert!((0.0..=1.0).contains(&p_large));
    }

    #[test]
    fn power_is_zero_without_observations() {
        let empty = VariantMetrics::default();
        let arm = VariantMetrics { impressions: 1000, conversions: 100, ..Default::default() };
        assert_eq!(achieved_power(&empty, &arm, MetricSelector::Conversions), 0.0);
        assert_eq!(achieved_power(&arm, &empty, MetricSelector::Conversions), 0.0);
    }
}
