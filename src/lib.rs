//! Splitstat
//!
//! Statistical inference engine for two-variant (A/B) experiments.
//! Pure computation: per-arm counters in, verdict out. No storage, no I/O,
//! no experiment lifecycle — those belong to the surrounding system.
//!
//! # Key Features
//! - Two-proportion z-test with pooled standard error
//! - Lift estimate with a 95% confidence interval
//! - Minimum-sample-size and achieved-power calculation
//! - Run-rate projection toward a target sample size
//! - Effect-size and sample-ratio-mismatch diagnostics
//! - Closed-form normal CDF and quantile approximations (no special-function
//!   dependency)
//!
//! Every function is total over its numeric domain: sparse or degenerate
//! counters produce a fully-formed inconclusive verdict instead of an error,
//! so an analysis pipeline never aborts on early data.
//!
//! # Example
//!
//! ```
//! use splitstat::{evaluate_significance, MetricSelector, VariantMetrics};
//!
//! let control = VariantMetrics { impressions: 1000, conversions: 100, ..Default::default() };
//! let challenger = VariantMetrics { impressions: 1000, conversions: 130, ..Default::default() };
//!
//! let verdict = evaluate_significance(&control, &challenger, MetricSelector::Conversions);
//! assert!(verdict.is_significant);
//! assert_eq!(verdict.lift, 30.0);
//! ```

pub mod constants;
pub mod diagnostics;
pub mod metrics;
pub mod normal;
pub mod run_rate;
pub mod sample_size;
pub mod significance;
pub mod validation;

pub use diagnostics::{check_sample_ratio, effect_size, EffectMagnitude, EffectSize, SrmCheck, SrmSeverity};
pub use metrics::{MetricSelector, ParseMetricError, VariantMetrics};
pub use run_rate::{days_remaining, days_remaining_from_start};
pub use sample_size::{achieved_power, minimum_sample_size};
pub use significance::{evaluate_significance, TestResult, Winner};

// Re-export so tests and downstream callers share the same version
pub use chrono;
