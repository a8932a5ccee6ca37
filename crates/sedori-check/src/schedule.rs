//! # Re-Check Schedule
//!
//! Maps each verdict status to the delay before the product should be
//! re-evaluated. The engine computes the date; acting on it belongs to
//! the external scheduler.
//!
//! `Prohibited` is terminal and never re-checked. Everything else drifts:
//! licenses lapse, tables change, pending evaluations must retry, so
//! every non-terminal status carries a delay.

use serde::{Deserialize, Serialize};

use sedori_core::{ComplianceStatus, Timestamp};

/// Status-to-delay table for re-check scheduling, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecheckSchedule {
    /// Delay after `NonCompliant`.
    pub non_compliant_days: i64,
    /// Delay after `NeedsLicense`.
    pub needs_license_days: i64,
    /// Delay after `RequiresReview`.
    pub requires_review_days: i64,
    /// Delay after `Compliant`.
    pub compliant_days: i64,
    /// Delay for `Pending` and any status without a dedicated entry.
    pub default_days: i64,
}

impl RecheckSchedule {
    /// When the next check is due, or `None` for a terminal status.
    ///
    /// The match is exhaustive: a new status variant is a compile error
    /// here until its scheduling is decided.
    pub fn next_check_at(
        &self,
        status: ComplianceStatus,
        performed_at: Timestamp,
    ) -> Option<Timestamp> {
        let days = match status {
            ComplianceStatus::Prohibited => return None,
            ComplianceStatus::NonCompliant => self.non_compliant_days,
            ComplianceStatus::NeedsLicense => self.needs_license_days,
            ComplianceStatus::RequiresReview => self.requires_review_days,
            ComplianceStatus::Compliant => self.compliant_days,
            ComplianceStatus::Pending => self.default_days,
        };
        Some(performed_at.add_days(days))
    }
}

impl Default for RecheckSchedule {
    fn default() -> Self {
        Self {
            non_compliant_days: 7,
            needs_license_days: 7,
            requires_review_days: 30,
            compliant_days: 90,
            default_days: 30,
        }
    }
}
