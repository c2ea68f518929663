//! Sample-Size Planning and Run-Rate Tests
//!
//! Integration coverage for the planner, the power estimate, and the
//! run-rate projector:
//! - Reference planner scenario and its degenerate fallbacks
//! - Power behavior across metrics and sample sizes
//! - Run-rate projections, including the timestamp convenience wrapper

use splitstat::chrono::{Duration, Utc};
use splitstat::{
    achieved_power, days_remaining, days_remaining_from_start, minimum_sample_size,
    MetricSelector, VariantMetrics,
};

// =============================================================================
// PLANNER
// =============================================================================

#[test]
fn reference_planning_scenario_lands_near_fifteen_thousand() {
    // 10% baseline, 10% relative detectable effect, alpha 0.05, power 0.80
    let n = minimum_sample_size(0.10, 0.10, 0.05, 0.80);
    assert!((14_013..=15_487).contains(&n), "n = {n}");
}

#[test]
fn degenerate_baselines_return_the_fixed_fallback() {
    for baseline in [0.0, -1.0, 1.0, 2.5] {
        assert_eq!(minimum_sample_size(baseline, 0.10, 0.05, 0.80), 10_000);
    }
}

#[test]
fn recommendations_never_drop_below_one_hundred() {
    for (baseline, mde) in [(0.5, 1.0), (0.3, 2.0), (0.2, 3.0), (0.9, 0.1)] {
        let n = minimum_sample_size(baseline, mde, 0.05, 0.80);
        assert!(n >= 100, "n = {n} for baseline {baseline}, mde {mde}");
    }
}

#[test]
fn tighter_alpha_or_higher_power_needs_more_samples() {
    let base = minimum_sample_size(0.10, 0.10, 0.05, 0.80);
    let stricter_alpha = minimum_sample_size(0.10, 0.10, 0.01, 0.80);
    let higher_power = minimum_sample_size(0.10, 0.10, 0.05, 0.90);

    assert!(stricter_alpha > base);
    assert!(higher_power > base);
}

#[test]
fn smaller_detectable_effects_need_more_samples() {
    let coarse = minimum_sample_size(0.10, 0.20, 0.05, 0.80);
    let fine = minimum_sample_size(0.10, 0.05, 0.05, 0.80);
    assert!(fine > coarse);
}

// =============================================================================
// POWER
// =============================================================================

#[test]
fn power_tracks_the_selected_metric() {
    // Clicks carry a large difference, conversions almost none
    let a = VariantMetrics {
        impressions: 2000,
        conversions: 100,
        clicks: 200,
        engagement: 0,
    };
    let b = VariantMetrics {
        impressions: 2000,
        conversions: 102,
        clicks: 400,
        engagement: 0,
    };

    let power_on_clicks = achieved_power(&a, &b, MetricSelector::Clicks);
    let power_on_conversions = achieved_power(&a, &b, MetricSelector::Conversions);

    assert!(power_on_clicks > 0.9, "clicks power = {power_on_clicks}");
    assert!(power_on_conversions < 0.2, "conversions power = {power_on_conversions}");
}

#[test]
fn power_is_clamped_to_the_unit_interval() {
    let a = VariantMetrics { impressions: 1_000_000, conversions: 10_000, ..Default::default() };
    let b = VariantMetrics { impressions: 1_000_000, conversions: 90_000, ..Default::default() };
    let power = achieved_power(&a, &b, MetricSelector::Conversions);
    assert!((0.0..=1.0).contains(&power));
    assert!(power > 0.999);
}

// =============================================================================
// RUN RATE
// =============================================================================

#[test]
fn projector_reference_cases() {
    // Rate undefined without impressions
    assert_eq!(days_remaining(0, 1000, 5), None);
    // Target already met
    assert_eq!(days_remaining(1000, 500, 5), Some(0));
    // 100 a day, 500 short
    assert_eq!(days_remaining(500, 1000, 5), Some(5));
}

#[test]
fn projector_rounds_partial_days_up() {
    // 3 a day, 10 short: four days, not three and a third
    assert_eq!(days_remaining(30, 40, 10), Some(4));
}

#[test]
fn timestamp_wrapper_matches_the_day_counter() {
    let started = Utc::now() - Duration::days(5);
    assert_eq!(
        days_remaining_from_start(500, 1000, started),
        days_remaining(500, 1000, 5)
    );

    // Under a day of history gives no rate
    assert_eq!(days_remaining_from_start(500, 1000, Utc::now()), None);
}
