//! # Compliance Status — Overall Verdict Taxonomy
//!
//! Defines [`ComplianceStatus`], the coarse outcome of one full evaluation
//! run. Callers that only need a gate check consume this enum alone; the
//! full verdict carries it alongside the structured rule results.
//!
//! `Prohibited` is terminal: a prohibited item is never re-checked, while
//! every other status maps to a re-check delay in the scheduling table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::SedoriError;

/// The overall outcome of a compliance evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Every contributing rule passed; the item may be listed.
    Compliant,
    /// At least one rule failed for a reason other than licensing.
    NonCompliant,
    /// Aggregate risk is elevated; a human should look before listing.
    RequiresReview,
    /// The only blocking failures are missing licenses.
    NeedsLicense,
    /// The item may not be sold or imported. Terminal.
    Prohibited,
    /// Evaluation did not complete; retried on the next scheduled check.
    Pending,
}

impl ComplianceStatus {
    /// All statuses in canonical order.
    pub fn all() -> &'static [ComplianceStatus] {
        &[
            Self::Compliant,
            Self::NonCompliant,
            Self::RequiresReview,
            Self::NeedsLicense,
            Self::Prohibited,
            Self::Pending,
        ]
    }

    /// Whether this status is terminal (no re-check is ever scheduled).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Prohibited)
    }

    /// Whether this status permits the product operation to proceed.
    ///
    /// Only `Compliant` passes. `Pending` blocks: an unevaluated item must
    /// not slip through as compliant.
    pub fn is_passing(&self) -> bool {
        matches!(self, Self::Compliant)
    }

    /// Returns the snake_case string identifier for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::NonCompliant => "non_compliant",
            Self::RequiresReview => "requires_review",
            Self::NeedsLicense => "needs_license",
            Self::Prohibited => "prohibited",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceStatus {
    type Err = SedoriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compliant" => Ok(Self::Compliant),
            "non_compliant" => Ok(Self::NonCompliant),
            "requires_review" => Ok(Self::RequiresReview),
            "needs_license" => Ok(Self::NeedsLicense),
            "prohibited" => Ok(Self::Prohibited),
            "pending" => Ok(Self::Pending),
            other => Err(SedoriError::UnknownValue(format!(
                "unknown compliance status: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_prohibited_is_terminal() {
        for status in ComplianceStatus::all() {
            assert_eq!(
                status.is_terminal(),
                *status == ComplianceStatus::Prohibited,
                "terminality of {status}"
            );
        }
    }

    #[test]
    fn test_only_compliant_passes() {
        for status in ComplianceStatus::all() {
            assert_eq!(
                status.is_passing(),
                *status == ComplianceStatus::Compliant,
                "is_passing of {status}"
            );
        }
    }

    #[test]
    fn test_pending_does_not_pass() {
        // An unevaluated item must not slip through a gate check.
        assert!(!ComplianceStatus::Pending.is_passing());
    }

    #[test]
    fn test_as_str_roundtrip() {
        for status in ComplianceStatus::all() {
            let parsed: ComplianceStatus = status.as_str().parse().unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("ok".parse::<ComplianceStatus>().is_err());
        assert!("COMPLIANT".parse::<ComplianceStatus>().is_err());
        assert!("".parse::<ComplianceStatus>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for status in ComplianceStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for status in ComplianceStatus::all() {
            assert_eq!(status.to_string(), status.as_str());
        }
    }
}
