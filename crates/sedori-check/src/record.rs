//! # Compliance Check Record
//!
//! The persisted, immutable outcome of one evaluation run for a
//! product/user pair. A new evaluation always creates a new record; old
//! records are never mutated, so the history of verdicts for a product is
//! append-only.
//!
//! Each record carries a content digest over its inputs-and-verdict view
//! (the random record id and the schedule-derived date are excluded).
//! Because evaluation is deterministic, re-evaluating unchanged inputs
//! produces a record with the same digest, which is how callers detect
//! "nothing changed since the last check".

use serde::{Deserialize, Serialize};

use sedori_core::{
    sha256_digest, CanonicalBytes, CheckId, ComplianceStatus, ContentDigest, ProductId,
    SedoriError, Timestamp, UserId,
};
use sedori_engine::{
    ComplianceVerdict, ProhibitedReason, Recommendation, RequiredDocument, RequiredLicense,
    RuleOutcome,
};

use crate::schedule::RecheckSchedule;

/// One persisted compliance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    /// Record identifier.
    pub id: CheckId,
    /// The product that was evaluated.
    pub product_id: ProductId,
    /// The user whose licenses were consulted.
    pub user_id: UserId,
    /// Overall status.
    pub status: ComplianceStatus,
    /// Numeric risk score in [0, 1].
    pub risk_score: f64,
    /// One entry per contributing rule.
    pub rule_results: Vec<RuleOutcome>,
    /// Licenses the user must obtain.
    pub required_licenses: Vec<RequiredLicense>,
    /// Documents the user must supply.
    pub required_documents: Vec<RequiredDocument>,
    /// Why the product is prohibited, if it is.
    pub prohibited_reasons: Vec<ProhibitedReason>,
    /// Consolidated recommendations.
    pub recommendations: Vec<Recommendation>,
    /// When the evaluation ran.
    pub performed_at: Timestamp,
    /// When the next check is due; `None` for terminal statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_check_at: Option<Timestamp>,
    /// Digest over the inputs-and-verdict view.
    pub digest: ContentDigest,
}

/// The digestable view of a check: stable inputs and verdict content,
/// without the random record id or the derived schedule date.
#[derive(Serialize)]
struct DigestView<'a> {
    product_id: &'a ProductId,
    user_id: &'a UserId,
    verdict: &'a ComplianceVerdict,
}

impl ComplianceCheck {
    /// Build a record from a combiner verdict.
    ///
    /// `performed_at` is the verdict's `evaluated_at`; the next-check
    /// date comes from the supplied schedule.
    ///
    /// # Errors
    ///
    /// Returns an error only if the verdict fails canonicalization, which
    /// would indicate a serialization defect rather than bad input.
    pub fn from_verdict(
        product_id: ProductId,
        user_id: UserId,
        verdict: &ComplianceVerdict,
        schedule: &RecheckSchedule,
    ) -> Result<Self, SedoriError> {
        let view = DigestView {
            product_id: &product_id,
            user_id: &user_id,
            verdict,
        };
        let digest = sha256_digest(&CanonicalBytes::new(&view)?);
        let performed_at = verdict.evaluated_at;
        Ok(Self {
            id: CheckId::new(),
            product_id,
            user_id,
            status: verdict.status,
            risk_score: verdict.risk_score,
            rule_results: verdict.rule_results.clone(),
            required_licenses: verdict.required_licenses.clone(),
            required_documents: verdict.required_documents.clone(),
            prohibited_reasons: verdict.prohibited_reasons.clone(),
            recommendations: verdict.recommendations.clone(),
            performed_at,
            next_check_at: schedule.next_check_at(verdict.status, performed_at),
            digest,
        })
    }

    /// Build the fallback record for an evaluation that did not complete.
    ///
    /// The caller's orchestration uses this when evaluation fails
    /// unexpectedly: the product gets a `Pending` record instead of no
    /// record, so the scheduler retries it instead of treating it as
    /// silently compliant.
    pub fn pending(
        product_id: ProductId,
        user_id: UserId,
        now: Timestamp,
        schedule: &RecheckSchedule,
    ) -> Result<Self, SedoriError> {
        #[derive(Serialize)]
        struct PendingView<'a> {
            product_id: &'a ProductId,
            user_id: &'a UserId,
            status: ComplianceStatus,
            performed_at: &'a Timestamp,
        }
        let digest = sha256_digest(&CanonicalBytes::new(&PendingView {
            product_id: &product_id,
            user_id: &user_id,
            status: ComplianceStatus::Pending,
            performed_at: &now,
        })?);
        Ok(Self {
            id: CheckId::new(),
            product_id,
            user_id,
            status: ComplianceStatus::Pending,
            risk_score: 0.0,
            rule_results: Vec::new(),
            required_licenses: Vec::new(),
            required_documents: Vec::new(),
            prohibited_reasons: Vec::new(),
            recommendations: Vec::new(),
            performed_at: now,
            next_check_at: schedule.next_check_at(ComplianceStatus::Pending, now),
            digest,
        })
    }

    /// Whether this check is due for re-evaluation as of `now`.
    ///
    /// Terminal checks are never due.
    pub fn is_due(&self, now: Timestamp) -> bool {
        match self.next_check_at {
            Some(due) => now >= due,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sedori_core::Product;
    use sedori_engine::ComplianceEngine;

    fn now() -> Timestamp {
        Timestamp::parse("2026-08-01T00:00:00Z").unwrap()
    }

    fn verdict_for(product: &Product) -> ComplianceVerdict {
        ComplianceEngine::builtin().evaluate(product, &[], None, &[], now())
    }

    fn check_for(product: &Product) -> (ProductId, UserId, ComplianceCheck) {
        let product_id = product.id;
        let user_id = UserId::new();
        let check = ComplianceCheck::from_verdict(
            product_id,
            user_id,
            &verdict_for(product),
            &RecheckSchedule::default(),
        )
        .unwrap();
        (product_id, user_id, check)
    }

    // ── from_verdict ─────────────────────────────────────────────────

    #[test]
    fn test_record_mirrors_verdict() {
        let product = Product::new("古物 カメラ", "", "");
        let (product_id, user_id, check) = check_for(&product);
        assert_eq!(check.product_id, product_id);
        assert_eq!(check.user_id, user_id);
        assert_eq!(check.status, ComplianceStatus::NeedsLicense);
        assert_eq!(check.performed_at, now());
        assert!(!check.rule_results.is_empty());
    }

    #[test]
    fn test_compliant_check_scheduled_in_90_days() {
        let product = Product::new("New Bluetooth Speaker", "sealed box", "Audio");
        let (_, _, check) = check_for(&product);
        assert_eq!(check.status, ComplianceStatus::Compliant);
        assert_eq!(check.next_check_at, Some(now().add_days(90)));
    }

    #[test]
    fn test_prohibited_check_is_terminal() {
        let product = Product::new("中古 拳銃", "", "");
        let (_, _, check) = check_for(&product);
        assert_eq!(check.status, ComplianceStatus::Prohibited);
        assert_eq!(check.next_check_at, None);
        assert!(!check.is_due(now().add_days(10_000)));
    }

    // ── Digest ───────────────────────────────────────────────────────

    #[test]
    fn test_same_inputs_same_digest() {
        // Two evaluations of identical inputs carry the same digest even
        // though the record ids differ.
        let product = Product::new("古物 カメラ", "", "");
        let user_id = UserId::new();
        let schedule = RecheckSchedule::default();
        let a =
            ComplianceCheck::from_verdict(product.id, user_id, &verdict_for(&product), &schedule)
                .unwrap();
        let b =
            ComplianceCheck::from_verdict(product.id, user_id, &verdict_for(&product), &schedule)
                .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.digest, b.digest);
    }

    #[test]
    fn test_different_users_different_digest() {
        let product = Product::new("古物 カメラ", "", "");
        let schedule = RecheckSchedule::default();
        let verdict = verdict_for(&product);
        let a = ComplianceCheck::from_verdict(product.id, UserId::new(), &verdict, &schedule)
            .unwrap();
        let b = ComplianceCheck::from_verdict(product.id, UserId::new(), &verdict, &schedule)
            .unwrap();
        assert_ne!(a.digest, b.digest);
    }

    // ── Pending fallback ─────────────────────────────────────────────

    #[test]
    fn test_pending_record_retries_on_default_delay() {
        let check = ComplianceCheck::pending(
            ProductId::new(),
            UserId::new(),
            now(),
            &RecheckSchedule::default(),
        )
        .unwrap();
        assert_eq!(check.status, ComplianceStatus::Pending);
        assert_eq!(check.risk_score, 0.0);
        assert!(check.rule_results.is_empty());
        assert_eq!(check.next_check_at, Some(now().add_days(30)));
    }

    #[test]
    fn test_pending_is_not_passing() {
        let check = ComplianceCheck::pending(
            ProductId::new(),
            UserId::new(),
            now(),
            &RecheckSchedule::default(),
        )
        .unwrap();
        assert!(!check.status.is_passing());
    }

    // ── Due computation ──────────────────────────────────────────────

    #[test]
    fn test_is_due_at_and_after_deadline() {
        let product = Product::new("New Bluetooth Speaker", "", "");
        let (_, _, check) = check_for(&product);
        assert!(!check.is_due(now()));
        assert!(!check.is_due(now().add_days(89)));
        assert!(check.is_due(now().add_days(90)));
        assert!(check.is_due(now().add_days(91)));
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_serde_roundtrip() {
        let product = Product::new("古物 カメラ", "", "");
        let (_, _, check) = check_for(&product);
        let json = serde_json::to_string(&check).unwrap();
        let parsed: ComplianceCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(check, parsed);
    }
}
