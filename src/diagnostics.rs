//! Experiment health diagnostics
//!
//! Checks that qualify a verdict rather than produce one: how large the
//! measured effect actually is, and whether the traffic split looks broken.
//! Both are pure computations over the same per-arm counters the evaluator
//! consumes.

use serde::{Deserialize, Serialize};

use crate::metrics::{MetricSelector, VariantMetrics};
use crate::normal;

/// Cohen's thresholds for interpreting an effect size h
const EFFECT_SMALL: f64 = 0.2;
const EFFECT_MEDIUM: f64 = 0.5;
const EFFECT_LARGE: f64 = 0.8;

/// SRM is flagged when its chi-squared p-value drops below this
const SRM_P_VALUE_THRESHOLD: f64 = 0.01;

/// Share deviation separating a warning from a critical mismatch
const SRM_DEVIATION_THRESHOLD: f64 = 0.05;

/// Qualitative reading of an effect size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectMagnitude {
    Negligible,
    Small,
    Medium,
    Large,
}

impl std::fmt::Display for EffectMagnitude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negligible => write!(f, "negligible"),
            Self::Small => write!(f, "small"),
            Self::Medium => write!(f, "medium"),
            Self::Large => write!(f, "large"),
        }
    }
}

/// Practical-significance metrics for the measured rate difference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectSize {
    /// Cohen's h (0.2 small, 0.5 medium, 0.8 large)
    pub cohens_h: f64,
    /// Interpretation of `cohens_h` by Cohen's conventions
    pub magnitude: EffectMagnitude,
    /// B's rate over A's rate; 0 when A has no successes
    pub relative_risk: f64,
    /// Odds of success on B relative to A; 0 when undefined
    pub odds_ratio: f64,
    /// How many subjects must see B for one additional success over A
    pub number_needed_to_treat: f64,
}

/// Effect size of B versus A on the selected metric
///
/// Statistical significance says a difference exists; this says whether it is
/// big enough to matter. A large test can reach p < 0.05 on a difference no
/// user would notice.
pub fn effect_size(
    variant_a: &VariantMetrics,
    variant_b: &VariantMetrics,
    metric: MetricSelector,
) -> EffectSize {
    let rate_a = variant_a.success_rate(metric);
    let rate_b = variant_b.success_rate(metric);

    // Arcsine transform stabilizes the variance of a proportion
    let cohens_h = (2.0 * rate_b.sqrt().asin() - 2.0 * rate_a.sqrt().asin()).abs();

    let magnitude = if cohens_h < EFFECT_SMALL {
        EffectMagnitude::Negligible
    } else if cohens_h < EFFECT_MEDIUM {
        EffectMagnitude::Small
    } else if cohens_h < EFFECT_LARGE {
        EffectMagnitude::Medium
    } else {
        EffectMagnitude::Large
    };

    let relative_risk = if rate_a > 0.0 { rate_b / rate_a } else { 0.0 };

    let odds_a = if rate_a < 1.0 { rate_a / (1.0 - rate_a) } else { f64::INFINITY };
    let odds_b = if rate_b < 1.0 { rate_b / (1.0 - rate_b) } else { f64::INFINITY };
    let odds_ratio = if odds_a > 0.0 && odds_a.is_finite() {
        odds_b / odds_a
    } else {
        0.0
    };

    let absolute_difference = (rate_b - rate_a).abs();
    let number_needed_to_treat = if absolute_difference > 0.0 {
        1.0 / absolute_difference
    } else {
        f64::INFINITY
    };

    EffectSize {
        cohens_h,
        magnitude,
        relative_risk,
        odds_ratio,
        number_needed_to_treat,
    }
}

/// Severity of a sample ratio mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SrmSeverity {
    None,
    Warning,
    Critical,
}

/// Result of the sample-ratio-mismatch check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrmCheck {
    /// Whether the observed split deviates beyond chance
    pub detected: bool,
    /// Share of traffic B was supposed to receive
    pub expected_share: f64,
    /// Share of impressions B actually received
    pub observed_share: f64,
    /// Chi-squared statistic (one degree of freedom)
    pub chi_squared: f64,
    /// p-value of the mismatch test
    pub p_value: f64,
    /// Graded severity of the mismatch
    pub severity: SrmSeverity,
}

/// Check the observed traffic split against the allocation it was assigned
///
/// A mismatch means the randomization or the metrics collection is broken,
/// and any verdict computed from the same counters is suspect.
/// `expected_share_b` is B's intended fraction of traffic, in (0, 1).
///
/// For one degree of freedom the chi-squared p-value reduces to the normal
/// tail: `p = 2 * (1 - cdf(sqrt(chi_squared)))`.
pub fn check_sample_ratio(
    variant_a: &VariantMetrics,
    variant_b: &VariantMetrics,
    expected_share_b: f64,
) -> SrmCheck {
    let total = variant_a.impressions + variant_b.impressions;

    if total == 0 {
        return SrmCheck {
            detected: false,
            expected_share: expected_share_b,
            observed_share: 0.5,
            chi_squared: 0.0,
            p_value: 1.0,
            severity: SrmSeverity::None,
        };
    }

    let total = total as f64;
    let observed_share = variant_b.impressions as f64 / total;

    let expected_a = total * (1.0 - expected_share_b);
    let expected_b = total * expected_share_b;

    let chi_squared = (variant_a.impressions as f64 - expected_a).powi(2) / expected_a
        + (variant_b.impressions as f64 - expected_b).powi(2) / expected_b;

    let p_value = 2.0 * (1.0 - normal::cdf(chi_squared.sqrt()));

    let deviation = (observed_share - expected_share_b).abs();
    let severity = if p_value > SRM_P_VALUE_THRESHOLD {
        SrmSeverity::None
    } else if deviation < SRM_DEVIATION_THRESHOLD {
        SrmSeverity::Warning
    } else {
        SrmSeverity::Critical
    };

    SrmCheck {
        detected: p_value < SRM_P_VALUE_THRESHOLD,
        expected_share: expected_share_b,
        observed_share,
        chi_squared,
        p_value,
        severity,
    }
}
