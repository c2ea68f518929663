//! Run-rate projection
//!
//! Estimates how many more days an experiment needs to reach a target sample
//! size, assuming the accrual rate observed so far holds.

use chrono::{DateTime, Utc};

/// Days remaining until `target_impressions` at the observed daily rate
///
/// Returns `None` when the rate is undefined (no elapsed days or no
/// impressions yet) and `Some(0)` when the target is already met.
pub fn days_remaining(
    current_impressions: u64,
    target_impressions: u64,
    days_elapsed: u64,
) -> Option<u64> {
    if days_elapsed == 0 || current_impressions == 0 {
        return None;
    }

    if target_impressions <= current_impressions {
        return Some(0);
    }

    let daily_rate = current_impressions as f64 / days_elapsed as f64;
    let deficit = (target_impressions - current_impressions) as f64;

    Some((deficit / daily_rate).ceil() as u64)
}

/// Days remaining, deriving elapsed days from the experiment start time
///
/// Convenience wrapper for callers that track a start timestamp instead of a
/// day counter. Whole elapsed days are counted; a test younger than one day
/// has no usable rate yet and returns `None`.
pub fn days_remaining_from_start(
    current_impressions: u64,
    target_impressions: u64,
    started_at: DateTime<Utc>,
) -> Option<u64> {
    let elapsed_days = Utc::now().signed_duration_since(started_at).num_days();
    if elapsed_days <= 0 {
        return None;
    }

    days_remaining(current_impressions, target_impressions, elapsed_days as u64)
}
