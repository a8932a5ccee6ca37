//! # License Input Model
//!
//! The dealer/import license records supplied by the license-management
//! collaborator. The engine never creates or transitions licenses; it
//! reads them to answer one question per evaluation: does the caller hold
//! usable coverage for the categories a product requires?
//!
//! Coverage is judged at an explicit `now` supplied by the caller, so the
//! same inputs always produce the same answer regardless of wall-clock
//! drift between evaluation and persistence.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::DealerCategory;
use crate::identity::{LicenseId, UserId};
use crate::temporal::Timestamp;

// ─── License Status ──────────────────────────────────────────────────

/// Administrative status of a license as recorded by the issuing authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    /// License is in force.
    Active,
    /// License lapsed at its expiry date.
    Expired,
    /// License was withdrawn by the authority. Terminal.
    Revoked,
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
        };
        f.write_str(s)
    }
}

// ─── License Scope ───────────────────────────────────────────────────

/// The set of dealer categories a license covers.
///
/// The wildcard scope is how the authority records "all categories" on a
/// single license; it is distinct from enumerating all 13, and it covers
/// any category the classifier can ever produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseScope {
    /// Covers every dealer category (wildcard).
    All,
    /// Covers only the enumerated categories.
    Categories(BTreeSet<DealerCategory>),
}

impl LicenseScope {
    /// Build a scope from an iterator of categories.
    pub fn of(categories: impl IntoIterator<Item = DealerCategory>) -> Self {
        Self::Categories(categories.into_iter().collect())
    }

    /// Whether this scope covers at least one of the required categories.
    ///
    /// An empty requirement set is covered by nothing: coverage questions
    /// are only asked once classification has produced at least one
    /// category, and a defensive `false` here keeps an impossible input
    /// from granting coverage.
    pub fn covers_any(&self, required: &BTreeSet<DealerCategory>) -> bool {
        if required.is_empty() {
            return false;
        }
        match self {
            Self::All => true,
            Self::Categories(held) => !held.is_disjoint(required),
        }
    }
}

// ─── License ─────────────────────────────────────────────────────────

/// A license held by a user, as read from the license store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// License record identifier.
    pub id: LicenseId,
    /// The user who holds this license.
    pub holder: UserId,
    /// Administrative status at read time.
    pub status: LicenseStatus,
    /// Categories covered.
    pub scope: LicenseScope,
    /// When the license was issued.
    pub issued_at: Timestamp,
    /// When the license expires, if it carries an expiry at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
}

impl License {
    /// Create an active license for a holder.
    pub fn active(
        holder: UserId,
        scope: LicenseScope,
        issued_at: Timestamp,
        expires_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id: LicenseId::new(),
            holder,
            status: LicenseStatus::Active,
            scope,
            issued_at,
            expires_at,
        }
    }

    /// Whether the license has passed its expiry date as of `now`.
    ///
    /// A license with no expiry date never expires by time. The recorded
    /// `status` may still say `Expired`; [`License::is_usable()`] checks both.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        match self.expires_at {
            Some(expiry) => now > expiry,
            None => false,
        }
    }

    /// Whether the license expires within `window_days` of `now`.
    ///
    /// False for already-expired licenses (those are not "expiring soon",
    /// they are gone) and for licenses without an expiry date.
    pub fn is_expiring_soon(&self, now: Timestamp, window_days: i64) -> bool {
        match self.expires_at {
            Some(expiry) => {
                if now > expiry {
                    return false;
                }
                now.days_until(&expiry) <= window_days
            }
            None => false,
        }
    }

    /// Whether the license can satisfy a coverage requirement as of `now`.
    ///
    /// Requires `Active` status AND no time-based expiry. A record whose
    /// status field lags reality (still `Active` past its expiry date)
    /// must not grant coverage.
    pub fn is_usable(&self, now: Timestamp) -> bool {
        self.status == LicenseStatus::Active && !self.is_expired(now)
    }

    /// Whether this license covers at least one of the required categories.
    ///
    /// Pure scope check; combine with [`License::is_usable()`] for the full
    /// sufficiency test.
    pub fn covers_any(&self, required: &BTreeSet<DealerCategory>) -> bool {
        self.scope.covers_any(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn required(categories: &[DealerCategory]) -> BTreeSet<DealerCategory> {
        categories.iter().copied().collect()
    }

    fn camera_license(status: LicenseStatus, expires_at: Option<Timestamp>) -> License {
        License {
            id: LicenseId::new(),
            holder: UserId::new(),
            status,
            scope: LicenseScope::of([DealerCategory::Cameras]),
            issued_at: ts("2024-01-01T00:00:00Z"),
            expires_at,
        }
    }

    // ── Expiry ───────────────────────────────────────────────────────

    #[test]
    fn test_no_expiry_never_expires() {
        let lic = camera_license(LicenseStatus::Active, None);
        assert!(!lic.is_expired(ts("2099-01-01T00:00:00Z")));
    }

    #[test]
    fn test_expired_after_expiry_date() {
        let lic = camera_license(LicenseStatus::Active, Some(ts("2026-06-01T00:00:00Z")));
        assert!(!lic.is_expired(ts("2026-06-01T00:00:00Z"))); // boundary: not yet past
        assert!(lic.is_expired(ts("2026-06-01T00:00:01Z")));
    }

    #[test]
    fn test_expiring_soon_within_window() {
        let lic = camera_license(LicenseStatus::Active, Some(ts("2026-08-20T00:00:00Z")));
        assert!(lic.is_expiring_soon(ts("2026-08-01T00:00:00Z"), 30));
        assert!(!lic.is_expiring_soon(ts("2026-06-01T00:00:00Z"), 30));
    }

    #[test]
    fn test_already_expired_is_not_expiring_soon() {
        let lic = camera_license(LicenseStatus::Active, Some(ts("2026-01-01T00:00:00Z")));
        assert!(!lic.is_expiring_soon(ts("2026-08-01T00:00:00Z"), 30));
    }

    #[test]
    fn test_no_expiry_is_not_expiring_soon() {
        let lic = camera_license(LicenseStatus::Active, None);
        assert!(!lic.is_expiring_soon(ts("2026-08-01T00:00:00Z"), 30));
    }

    // ── Usability ────────────────────────────────────────────────────

    #[test]
    fn test_active_unexpired_is_usable() {
        let lic = camera_license(LicenseStatus::Active, Some(ts("2099-01-01T00:00:00Z")));
        assert!(lic.is_usable(ts("2026-08-01T00:00:00Z")));
    }

    #[test]
    fn test_revoked_is_not_usable() {
        let lic = camera_license(LicenseStatus::Revoked, Some(ts("2099-01-01T00:00:00Z")));
        assert!(!lic.is_usable(ts("2026-08-01T00:00:00Z")));
    }

    #[test]
    fn test_expired_status_is_not_usable() {
        let lic = camera_license(LicenseStatus::Expired, None);
        assert!(!lic.is_usable(ts("2026-08-01T00:00:00Z")));
    }

    #[test]
    fn test_stale_active_status_is_not_usable() {
        // Status still says Active but the expiry date has passed.
        let lic = camera_license(LicenseStatus::Active, Some(ts("2026-01-01T00:00:00Z")));
        assert!(!lic.is_usable(ts("2026-08-01T00:00:00Z")));
    }

    // ── Coverage ─────────────────────────────────────────────────────

    #[test]
    fn test_wildcard_covers_every_category() {
        let scope = LicenseScope::All;
        for &category in DealerCategory::all() {
            assert!(scope.covers_any(&required(&[category])));
        }
    }

    #[test]
    fn test_enumerated_scope_covers_intersection() {
        let scope = LicenseScope::of([DealerCategory::Cameras, DealerCategory::Books]);
        assert!(scope.covers_any(&required(&[DealerCategory::Cameras])));
        assert!(scope.covers_any(&required(&[
            DealerCategory::Art,
            DealerCategory::Books
        ])));
        assert!(!scope.covers_any(&required(&[DealerCategory::Automobiles])));
    }

    #[test]
    fn test_empty_requirement_is_never_covered() {
        assert!(!LicenseScope::All.covers_any(&BTreeSet::new()));
        assert!(!LicenseScope::of([DealerCategory::Books]).covers_any(&BTreeSet::new()));
    }

    #[test]
    fn test_empty_enumerated_scope_covers_nothing() {
        let scope = LicenseScope::Categories(BTreeSet::new());
        assert!(!scope.covers_any(&required(&[DealerCategory::Cameras])));
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_serde_roundtrip() {
        let lic = camera_license(LicenseStatus::Active, Some(ts("2027-01-01T00:00:00Z")));
        let json = serde_json::to_string(&lic).unwrap();
        let parsed: License = serde_json::from_str(&json).unwrap();
        assert_eq!(lic, parsed);
    }

    #[test]
    fn test_serde_omits_absent_expiry() {
        let lic = camera_license(LicenseStatus::Active, None);
        let json = serde_json::to_string(&lic).unwrap();
        assert!(!json.contains("expires_at"));
    }
}
