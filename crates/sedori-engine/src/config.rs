//! # Engine Configuration
//!
//! Every tunable constant in the evaluation core lives here as an explicit
//! field of [`EngineConfig`]: the ordinal-to-score mapping, the
//! requires-review threshold, the license expiring-soon window, and the
//! tariff accumulation policy.
//!
//! The defaults (0.3 review threshold; 1.0/0.8/0.5/0.2/0.0 scores) were
//! chosen operationally, not derived from regulatory outcome data, so they
//! are configuration rather than literals in the combiner. Out-of-range
//! inputs are clamped with a `tracing::warn!` instead of rejected: a
//! miscalibrated threshold must degrade loudly, not take evaluation down.

use serde::{Deserialize, Serialize};

use sedori_core::RiskLevel;

// ─── Score Map ───────────────────────────────────────────────────────

/// Maps each [`RiskLevel`] to its contribution to the numeric risk score.
///
/// The combined score is the maximum (never an average) of per-rule
/// scores, so the map must be monotone in severity for the score to be
/// monotone in the worst contributing level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreMap {
    /// Score for `RiskLevel::None`.
    pub none: f64,
    /// Score for `RiskLevel::Low`.
    pub low: f64,
    /// Score for `RiskLevel::Medium`.
    pub medium: f64,
    /// Score for `RiskLevel::High`.
    pub high: f64,
    /// Score for `RiskLevel::Prohibited`.
    pub prohibited: f64,
}

impl ScoreMap {
    /// Build a score map, sanitizing each value into [0.0, 1.0] and then
    /// restoring monotonicity by raising each level to at least the one
    /// below it. Every adjustment is logged.
    pub fn new(none: f64, low: f64, medium: f64, high: f64, prohibited: f64) -> Self {
        let none = sanitize_unit("score_map.none", none, 0.0);
        let low = sanitize_unit("score_map.low", low, 0.2).max(none);
        let medium = sanitize_unit("score_map.medium", medium, 0.5).max(low);
        let high = sanitize_unit("score_map.high", high, 0.8).max(medium);
        let prohibited = sanitize_unit("score_map.prohibited", prohibited, 1.0).max(high);
        Self {
            none,
            low,
            medium,
            high,
            prohibited,
        }
    }

    /// The score a rule result at `level` contributes.
    pub fn score(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::None => self.none,
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
            RiskLevel::Prohibited => self.prohibited,
        }
    }
}

impl Default for ScoreMap {
    fn default() -> Self {
        Self {
            none: 0.0,
            low: 0.2,
            medium: 0.5,
            high: 0.8,
            prohibited: 1.0,
        }
    }
}

/// Clamp a configuration value into [0.0, 1.0]; NaN falls back to the default.
fn sanitize_unit(field: &str, value: f64, default: f64) -> f64 {
    if value.is_nan() {
        tracing::warn!(field, "NaN config value, using default {default}");
        default
    } else if value < 0.0 {
        tracing::warn!(field, value, "config value below 0.0, clamping");
        0.0
    } else if value > 1.0 {
        tracing::warn!(field, value, "config value above 1.0, clamping");
        1.0
    } else {
        value
    }
}

// ─── Tariff Policy ───────────────────────────────────────────────────

/// How to combine several tariff-bearing restriction matches.
///
/// The shipped default keeps the first match in table order. `Sum`
/// accumulates the duty amounts of every tariff-bearing match, for
/// deployments that treat multiple headings as stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffPolicy {
    /// Keep the first tariff-bearing match; ignore later ones.
    #[default]
    FirstMatch,
    /// Sum duty amounts across all tariff-bearing matches.
    Sum,
}

// ─── Engine Config ───────────────────────────────────────────────────

/// The read-only configuration for one engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ordinal-to-score mapping for the combined risk score.
    pub score_map: ScoreMap,
    /// Scores strictly above this force `RequiresReview` when nothing
    /// worse applies.
    pub review_threshold: f64,
    /// A covering license expiring within this many days draws a warning
    /// and escalates antique risk to at least `Medium`.
    pub expiring_soon_days: i64,
    /// Tariff accumulation policy across multiple matches.
    pub tariff_policy: TariffPolicy,
}

impl EngineConfig {
    /// Replace the review threshold, clamping into [0.0, 1.0] (NaN keeps
    /// the default) with a warning on adjustment.
    #[must_use]
    pub fn with_review_threshold(mut self, threshold: f64) -> Self {
        self.review_threshold = sanitize_unit("review_threshold", threshold, 0.3);
        self
    }

    /// Replace the expiring-soon window. Negative windows are clamped to
    /// zero (disabling the warning) with a log line.
    #[must_use]
    pub fn with_expiring_soon_days(mut self, days: i64) -> Self {
        self.expiring_soon_days = if days < 0 {
            tracing::warn!(days, "negative expiring_soon_days, clamping to 0");
            0
        } else {
            days
        };
        self
    }

    /// Replace the tariff policy.
    #[must_use]
    pub fn with_tariff_policy(mut self, policy: TariffPolicy) -> Self {
        self.tariff_policy = policy;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            score_map: ScoreMap::default(),
            review_threshold: 0.3,
            expiring_soon_days: 30,
            tariff_policy: TariffPolicy::default(),
        }
    }
}
