//! Advisory input validation
//!
//! The evaluator itself is total and accepts any counters, so these checks
//! are for the ingestion boundary: a caller mapping raw metrics-store rows
//! into [`VariantMetrics`] can reject snapshots that are internally
//! inconsistent before they reach an analysis.

use anyhow::{anyhow, Result};

use crate::metrics::VariantMetrics;

/// Validate that a variant snapshot is internally consistent
///
/// Each success counter must not exceed the impression count, and
/// conversions cannot exceed the clicks they came from (when any clicks were
/// recorded at all).
pub fn validate_variant_metrics(metrics: &VariantMetrics) -> Result<()> {
    if metrics.conversions > metrics.impressions {
        return Err(anyhow!(
            "conversions ({}) exceed impressions ({})",
            metrics.conversions,
            metrics.impressions
        ));
    }

    if metrics.clicks > metrics.impressions {
        return Err(anyhow!(
            "clicks ({}) exceed impressions ({})",
            metrics.clicks,
            metrics.impressions
        ));
    }

    if metrics.engagement > metrics.impressions {
        return Err(anyhow!(
            "engagement ({}) exceeds impressions ({})",
            metrics.engagement,
            metrics.impressions
        ));
    }

    if metrics.clicks > 0 && metrics.conversions > metrics.clicks {
        return Err(anyhow!(
            "conversions ({}) exceed clicks ({})",
            metrics.conversions,
            metrics.clicks
        ));
    }

    Ok(())
}

/// Validate an intended traffic share for the sample-ratio check
pub fn validate_traffic_share(share: f64) -> Result<()> {
    if !share.is_finite() || share <= 0.0 || share >= 1.0 {
        return Err(anyhow!(
            "traffic share must be inside the open interval (0, 1), got {share}"
        ));
    }
    Ok(())
}
