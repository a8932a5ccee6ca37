//! # Antique-Dealer Rule Set
//!
//! Evaluates whether a product falls under secondhand-dealer regulation
//! and, if so, whether the caller's licenses cover it.
//!
//! Evaluation order is fixed:
//!
//! 1. Antique gate — no antique term in the corpus means the regulation
//!    does not apply and the result is trivially compliant.
//! 2. Category classification — every category whose keywords match; an
//!    unclassifiable antique falls back to wildcard coverage, never to an
//!    empty requirement.
//! 3. Prohibited-items check — any match ends evaluation at `Prohibited`;
//!    the license check is skipped because no license makes a banned item
//!    sellable.
//! 4. License sufficiency over usable (active, unexpired) licenses, with
//!    an expiring-soon warning that escalates risk to at least `Medium`
//!    without ever demoting a worse level.
//! 5. Standing recommendations whenever a license is required.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sedori_core::{DealerCategory, License, LicenseScope, Product, RiskLevel, Timestamp};
use sedori_rules::{build_corpus, matched_keywords, matches_any, RuleTables};

use crate::combine::LegalReason;
use crate::config::EngineConfig;

/// The statute behind every license finding in this rule set.
pub const ANTIQUE_DEALER_LAW: &str = "古物営業法 (Antique Dealer Law)";

/// Outcome of the antique-dealer evaluation for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiqueAssessment {
    /// Whether the product passes this rule set.
    pub compliant: bool,
    /// Worst severity found.
    pub risk_level: RiskLevel,
    /// Whether dealer regulation applies to the product at all.
    pub requires_license: bool,
    /// Whether a usable license covers the required categories.
    pub has_valid_license: bool,
    /// The coverage a license must provide: the matched category set, or
    /// wildcard for an unclassifiable antique. `None` when the product is
    /// not antique and no coverage is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_coverage: Option<LicenseScope>,
    /// Violations found (prohibited items, missing license).
    pub violations: Vec<LegalReason>,
    /// Non-blocking findings (expiring coverage).
    pub warnings: Vec<String>,
    /// Seller guidance.
    pub recommendations: Vec<String>,
}

impl AntiqueAssessment {
    /// The passthrough result for a product with no antique term.
    fn not_applicable() -> Self {
        Self {
            compliant: true,
            risk_level: RiskLevel::None,
            requires_license: false,
            has_valid_license: false,
            required_coverage: None,
            violations: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// Whether a license satisfies a coverage requirement as of `now`.
///
/// Wildcard-requirement items (unclassifiable antiques) are only covered
/// by wildcard licenses; enumerated requirements are covered by a
/// wildcard license or any scope intersection.
fn license_covers(license: &License, requirement: &LicenseScope, now: Timestamp) -> bool {
    if !license.is_usable(now) {
        return false;
    }
    match requirement {
        LicenseScope::All => license.scope == LicenseScope::All,
        LicenseScope::Categories(set) => license.covers_any(set),
    }
}

/// Evaluate the antique-dealer rule set for one product.
///
/// Pure: reads only the supplied tables, config, product, licenses, and
/// `now`. Absent licenses are not an error; they evaluate as insufficient
/// coverage.
pub fn evaluate_antique(
    tables: &RuleTables,
    config: &EngineConfig,
    product: &Product,
    licenses: &[License],
    now: Timestamp,
) -> AntiqueAssessment {
    let corpus = build_corpus(product);

    // 1. Antique gate.
    if !matches_any(&corpus, &tables.antique_terms) {
        return AntiqueAssessment::not_applicable();
    }

    // 2. Category classification, wildcard fallback when nothing matches.
    let matched: BTreeSet<DealerCategory> = tables
        .category_keywords
        .iter()
        .filter(|(_, keywords)| matches_any(&corpus, keywords))
        .map(|(&category, _)| category)
        .collect();
    let required_coverage = if matched.is_empty() {
        LicenseScope::All
    } else {
        LicenseScope::Categories(matched)
    };

    // 3. Prohibited items: one violation per matched term, then stop.
    // No license makes a banned item sellable, so the license check is
    // skipped entirely.
    let mut violations: Vec<LegalReason> = Vec::new();
    for item in &tables.prohibited_items {
        for term in matched_keywords(&corpus, &item.keywords) {
            violations.push(LegalReason {
                reason: format!(
                    "prohibited item term {term:?} matched class \"{}\"",
                    item.label
                ),
                legal_basis: item.legal_basis.clone(),
            });
        }
    }
    if !violations.is_empty() {
        return AntiqueAssessment {
            compliant: false,
            risk_level: RiskLevel::Prohibited,
            requires_license: true,
            has_valid_license: false,
            required_coverage: Some(required_coverage),
            violations,
            warnings: Vec::new(),
            recommendations: Vec::new(),
        };
    }

    // 4. License sufficiency.
    let covering: Vec<&License> = licenses
        .iter()
        .filter(|l| license_covers(l, &required_coverage, now))
        .collect();
    let has_valid_license = !covering.is_empty();

    let mut risk_level = RiskLevel::Low;
    let mut compliant = true;
    let mut warnings: Vec<String> = Vec::new();

    if !has_valid_license {
        compliant = false;
        risk_level = RiskLevel::High;
        violations.push(LegalReason {
            reason: "no usable dealer license covers the required categories; \
                     obtain coverage before listing"
                .to_string(),
            legal_basis: ANTIQUE_DEALER_LAW.to_string(),
        });
    } else if covering
        .iter()
        .all(|l| l.is_expiring_soon(now, config.expiring_soon_days))
    {
        // Coverage exists today but all of it lapses within the window.
        warnings.push(format!(
            "every covering dealer license expires within {} days; renew before it lapses",
            config.expiring_soon_days
        ));
        risk_level = risk_level.escalate(RiskLevel::Medium);
    }

    // 5. Standing recommendations. Dealer regulation applies from here on.
    let mut recommendations = vec![
        "keep dealer transaction records (取引記録) for every purchase and sale".to_string(),
    ];
    if let LicenseScope::Categories(set) = &required_coverage {
        if set.contains(&DealerCategory::WatchesJewelry) {
            recommendations.push(
                "watches and jewelry require identity verification of the counterparty \
                 at purchase"
                    .to_string(),
            );
        }
        if set.contains(&DealerCategory::Books) {
            recommendations.push(
                "bulk book purchases above the statutory threshold require counterparty \
                 identity checks"
                    .to_string(),
            );
        }
    }

    AntiqueAssessment {
        compliant,
        risk_level,
        requires_license: true,
        has_valid_license,
        required_coverage: Some(required_coverage),
        violations,
        warnings,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sedori_core::{LicenseStatus, UserId};

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn now() -> Timestamp {
        ts("2026-08-01T00:00:00Z")
    }

    fn tables() -> RuleTables {
        RuleTables::builtin()
    }

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn camera_license(expires_at: Option<&str>) -> License {
        License::active(
            UserId::new(),
            LicenseScope::of([DealerCategory::Cameras]),
            ts("2024-01-01T00:00:00Z"),
            expires_at.map(|s| ts(s)),
        )
    }

    fn eval(product: &Product, licenses: &[License]) -> AntiqueAssessment {
        evaluate_antique(&tables(), &config(), product, licenses, now())
    }

    // ── Non-antique passthrough ──────────────────────────────────────

    #[test]
    fn test_non_antique_is_trivially_compliant() {
        let product = Product::new("New Bluetooth Speaker", "sealed box", "Audio");
        let result = eval(&product, &[]);
        assert!(result.compliant);
        assert!(!result.requires_license);
        assert_eq!(result.risk_level, RiskLevel::None);
        assert!(result.violations.is_empty());
        assert!(result.warnings.is_empty());
        assert!(result.required_coverage.is_none());
    }

    #[test]
    fn test_non_antique_ignores_license_input() {
        // Passthrough is identical with or without licenses.
        let product = Product::new("New Bluetooth Speaker", "sealed box", "Audio");
        let without = eval(&product, &[]);
        let with = eval(&product, &[camera_license(None)]);
        assert_eq!(without, with);
    }

    // ── Classification ───────────────────────────────────────────────

    #[test]
    fn test_camera_classified() {
        let product = Product::new("中古 カメラ", "Nikon F3", "カメラ");
        let result = eval(&product, &[]);
        assert_eq!(
            result.required_coverage,
            Some(LicenseScope::of([DealerCategory::Cameras]))
        );
    }

    #[test]
    fn test_multi_category_classification() {
        let product = Product::new("中古 レザーバッグと腕時計", "", "");
        let result = eval(&product, &[]);
        match result.required_coverage {
            Some(LicenseScope::Categories(set)) => {
                assert!(set.contains(&DealerCategory::LeatherRubber));
                assert!(set.contains(&DealerCategory::WatchesJewelry));
            }
            other => panic!("expected category set, got {other:?}"),
        }
    }

    #[test]
    fn test_unclassifiable_antique_falls_back_to_wildcard() {
        let product = Product::new("中古品", "詳細不明", "その他");
        let result = eval(&product, &[]);
        assert_eq!(result.required_coverage, Some(LicenseScope::All));
    }

    // ── Prohibited items ─────────────────────────────────────────────

    #[test]
    fn test_prohibited_item_short_circuits() {
        let product = Product::new("中古 拳銃", "軍用", "コレクション");
        // A wildcard license must not rescue a prohibited item.
        let wildcard = License::active(
            UserId::new(),
            LicenseScope::All,
            ts("2024-01-01T00:00:00Z"),
            None,
        );
        let result = eval(&product, &[wildcard]);
        assert!(!result.compliant);
        assert_eq!(result.risk_level, RiskLevel::Prohibited);
        assert!(!result.violations.is_empty());
        assert!(!result.has_valid_license);
        assert!(result.requires_license);
    }

    #[test]
    fn test_one_violation_per_matched_term() {
        let product = Product::new("中古 拳銃 ピストル", "", "");
        let result = eval(&product, &[]);
        assert!(result.violations.len() >= 2);
    }

    #[test]
    fn test_violation_carries_legal_basis() {
        let product = Product::new("中古 象牙 細工", "", "");
        let result = eval(&product, &[]);
        assert!(result
            .violations
            .iter()
            .any(|v| v.legal_basis.contains("種の保存法")));
    }

    // ── License sufficiency ──────────────────────────────────────────

    #[test]
    fn test_missing_license_is_high_risk() {
        let product = Product::new("古物 カメラ", "", "");
        let result = eval(&product, &[]);
        assert!(!result.compliant);
        assert!(result.requires_license);
        assert!(!result.has_valid_license);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result
            .violations
            .iter()
            .any(|v| v.legal_basis == ANTIQUE_DEALER_LAW));
    }

    #[test]
    fn test_matching_category_license_suffices() {
        let product = Product::new("古物 カメラ", "", "");
        let result = eval(&product, &[camera_license(Some("2027-08-01T00:00:00Z"))]);
        assert!(result.compliant);
        assert!(result.has_valid_license);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_wildcard_license_suffices() {
        let product = Product::new("古物 カメラ", "", "");
        let wildcard = License::active(
            UserId::new(),
            LicenseScope::All,
            ts("2024-01-01T00:00:00Z"),
            None,
        );
        let result = eval(&product, &[wildcard]);
        assert!(result.compliant);
        assert!(result.has_valid_license);
    }

    #[test]
    fn test_expired_license_is_insufficient() {
        let product = Product::new("古物 カメラ", "", "");
        let result = eval(&product, &[camera_license(Some("2026-01-01T00:00:00Z"))]);
        assert!(!result.has_valid_license);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_revoked_license_is_insufficient() {
        let product = Product::new("古物 カメラ", "", "");
        let mut lic = camera_license(None);
        lic.status = LicenseStatus::Revoked;
        let result = eval(&product, &[lic]);
        assert!(!result.has_valid_license);
    }

    #[test]
    fn test_wrong_category_license_is_insufficient() {
        let product = Product::new("古物 カメラ", "", "");
        let lic = License::active(
            UserId::new(),
            LicenseScope::of([DealerCategory::Books]),
            ts("2024-01-01T00:00:00Z"),
            None,
        );
        let result = eval(&product, &[lic]);
        assert!(!result.has_valid_license);
    }

    #[test]
    fn test_wildcard_requirement_needs_wildcard_license() {
        // An unclassifiable antique is not covered by a single-category license.
        let product = Product::new("中古品", "詳細不明", "その他");
        let result = eval(&product, &[camera_license(None)]);
        assert!(!result.has_valid_license);
    }

    // ── Expiring-soon escalation ─────────────────────────────────────

    #[test]
    fn test_expiring_soon_warns_and_escalates() {
        let product = Product::new("古物 カメラ", "", "");
        let result = eval(&product, &[camera_license(Some("2026-08-20T00:00:00Z"))]);
        assert!(result.compliant);
        assert!(result.has_valid_license);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_second_stable_license_suppresses_expiry_warning() {
        let product = Product::new("古物 カメラ", "", "");
        let expiring = camera_license(Some("2026-08-20T00:00:00Z"));
        let stable = camera_license(Some("2028-01-01T00:00:00Z"));
        let result = eval(&product, &[expiring, stable]);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.warnings.is_empty());
    }

    // ── Recommendations ──────────────────────────────────────────────

    #[test]
    fn test_record_keeping_recommended_when_license_required() {
        let product = Product::new("古物 カメラ", "", "");
        let result = eval(&product, &[]);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("取引記録")));
    }

    #[test]
    fn test_jewelry_specific_recommendation() {
        let product = Product::new("中古 腕時計", "", "");
        let result = eval(&product, &[]);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("jewelry")));
    }

    #[test]
    fn test_books_specific_recommendation() {
        let product = Product::new("中古の古書 まとめ売り", "", "");
        let result = eval(&product, &[]);
        assert!(result.recommendations.iter().any(|r| r.contains("book")));
    }

    // ── Idempotence ──────────────────────────────────────────────────

    #[test]
    fn test_evaluation_is_idempotent() {
        let product = Product::new("古物 カメラ", "レンズ付き", "カメラ")
            .with_metadata("brand", "Canon");
        let licenses = vec![camera_license(Some("2027-01-01T00:00:00Z"))];
        let a = eval(&product, &licenses);
        let b = eval(&product, &licenses);
        assert_eq!(a, b);
    }
}
