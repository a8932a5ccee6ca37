//! # Risk Level — Ordered Severity Taxonomy
//!
//! Defines [`RiskLevel`], the ordinal severity classification shared by
//! every rule evaluation in the engine.
//!
//! Severity forms a strict total order:
//!
//! ```text
//! None < Low < Medium < High < Prohibited
//! ```
//!
//! Combination rules are expressed against this order:
//!
//! - "escalate to at least X" is [`RiskLevel::escalate()`] (a `max`).
//! - "never downgrade" holds because escalation only moves up the order.
//! - `Prohibited` is absorbing under `max`: once any contributing rule is
//!   prohibited, no combination of milder results can dilute it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SedoriError;

/// Ordinal severity of a compliance finding.
///
/// Declaration order is the severity order, so the derived `Ord` matches
/// the domain meaning and `max()` implements escalation directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No regulatory concern identified.
    #[default]
    None,
    /// Regulation applies but the caller satisfies it.
    Low,
    /// Satisfied today, but degrading (e.g., a license expiring soon).
    Medium,
    /// A requirement is unmet (e.g., missing license or documentation).
    High,
    /// The item may not be sold or imported at all.
    Prohibited,
}

impl RiskLevel {
    /// All risk levels in ascending severity order.
    pub fn all() -> &'static [RiskLevel] {
        &[
            Self::None,
            Self::Low,
            Self::Medium,
            Self::High,
            Self::Prohibited,
        ]
    }

    /// Raise this level to at least `floor`, never lowering it.
    #[must_use]
    pub fn escalate(self, floor: RiskLevel) -> RiskLevel {
        self.max(floor)
    }

    /// Returns the snake_case string identifier for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Prohibited => "prohibited",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = SedoriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "prohibited" => Ok(Self::Prohibited),
            other => Err(SedoriError::UnknownValue(format!(
                "unknown risk level: {other:?}"
            ))),
        }
    }
}
