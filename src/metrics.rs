//! Per-variant observed counters and rate calculators
//!
//! [`VariantMetrics`] is the immutable snapshot a caller assembles from its
//! metrics store, one per arm, fresh for every evaluation. The rate helpers
//! return human-readable percentages and never divide by zero.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which counter is treated as the success signal for a hypothesis test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricSelector {
    /// Completed goal events (purchases, sign-ups)
    #[default]
    Conversions,
    /// Click interactions
    Clicks,
    /// Engagement events (scrolls, opens, dwell)
    Engagement,
}

impl MetricSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricSelector::Conversions => "conversions",
            MetricSelector::Clicks => "clicks",
            MetricSelector::Engagement => "engagement",
        }
    }
}

/// Error parsing a metric selector from its wire name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric selector: {0}")]
pub struct ParseMetricError(String);

impl FromStr for MetricSelector {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conversions" => Ok(MetricSelector::Conversions),
            "clicks" => Ok(MetricSelector::Clicks),
            "engagement" => Ok(MetricSelector::Engagement),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}

/// Observed counters for one experiment arm
///
/// Each success counter is conceptually bounded by `impressions`, though the
/// engine does not enforce that; see [`crate::validation`] for an advisory
/// check at the ingestion boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantMetrics {
    /// Number of times this variant was shown (trials)
    pub impressions: u64,
    /// Completed goal events
    pub conversions: u64,
    /// Click interactions
    pub clicks: u64,
    /// Engagement events
    pub engagement: u64,
}

impl VariantMetrics {
    /// Engagement rate as a percentage of impressions
    pub fn engagement_rate(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.engagement as f64 / self.impressions as f64 * 100.0
        }
    }

    /// Click-through rate as a percentage of impressions
    pub fn click_through_rate(&self) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.clicks as f64 / self.impressions as f64 * 100.0
        }
    }

    /// Conversion rate as a percentage of clicks
    pub fn conversion_rate(&self) -> f64 {
        if self.clicks == 0 {
            0.0
        } else {
            self.conversions as f64 / self.clicks as f64 * 100.0
        }
    }

    /// The raw success count for the selected metric
    pub fn success_count(&self, metric: MetricSelector) -> u64 {
        match metric {
            MetricSelector::Conversions => self.conversions,
            MetricSelector::Clicks => self.clicks,
            MetricSelector::Engagement => self.engagement,
        }
    }

    /// Success fraction (successes / impressions) for the selected metric
    ///
    /// Returns 0.0 when there are no impressions.
    pub fn success_rate(&self, metric: MetricSelector) -> f64 {
        if self.impressions == 0 {
            0.0
        } else {
            self.success_count(metric) as f64 / self.impressions as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_are_zero_when_denominator_is_zero() {
        let empty = VariantMetrics::default();
        assert_eq!(empty.engagement_rate(), 0.0);
        assert_eq!(empty.click_through_rate(), 0.0);
        assert_eq!(empty.conversion_rate(), 0.0);

        // Conversions without clicks: conversion rate divides by clicks
        let no_clicks = VariantMetrics {
            impressions: 100,
            conversions: 10,
            ..Default::default()
        };
        assert_eq!(no_clicks.conversion_rate(), 0.0);
    }

    #[test]
    fn rates_are_percentages() {
        let m = VariantMetrics {
            impressions: 1000,
            conversions: 30,
            clicks: 200,
            engagement: 500,
        };
        assert!((m.click_through_rate() - 20.0).abs() < 1e-12);
        assert!((m.engagement_rate() - 50.0).abs() < 1e-12);
        assert!((m.conversion_rate() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn success_rate_follows_the_selector() {
        let m = VariantMetrics {
            impressions: 1000,
            conversions: 100,
            clicks: 250,
            engagement: 400,
        };
        assert!((m.success_rate(MetricSelector::Conversions) - 0.10).abs() < 1e-12);
        assert!((m.success_rate(MetricSelector::Clicks) - 0.25).abs() < 1e-12);
        assert!((m.success_rate(MetricSelector::Engagement) - 0.40).abs() < 1e-12);
    }

    #[test]
    fn metric_selector_round_trips_through_strings() {
        for metric in [
            MetricSelector::Conversions,
            MetricSelector::Clicks,
            MetricSelector::Engagement,
        ] {
            assert_eq!(metric.as_str().parse::<MetricSelector>().unwrap(), metric);
        }
        assert_eq!("CLICKS".parse::<MetricSelector>().unwrap(), MetricSelector::Clicks);
        assert!("bounce_rate".parse::<MetricSelector>().is_err());
    }

    #[test]
    fn default_metric_is_conversions() {
        assert_eq!(MetricSelector::default(), MetricSelector::Conversions);
    }
}
