//! # End-to-End Evaluation Scenarios
//!
//! Each test runs the full pipeline (both rule sets plus the combiner)
//! through [`ComplianceEngine`] the way the surrounding service would:
//! one product, the caller's licenses, an optional origin, and the
//! freeform rules selected upstream.

use sedori_core::{
    ComplianceStatus, DealerCategory, License, LicenseScope, Product, RegulationRule, RiskLevel,
    Timestamp, UserId,
};
use sedori_engine::{evaluate_antique, ComplianceEngine, EngineConfig, RuleSource};
use sedori_rules::RuleTables;

fn now() -> Timestamp {
    Timestamp::parse("2026-08-01T00:00:00Z").unwrap()
}

fn engine() -> ComplianceEngine {
    ComplianceEngine::builtin()
}

// ─── Prohibited antique item ─────────────────────────────────────────

#[test]
fn prohibited_antique_item_dominates_everything() {
    let product = Product::new("中古 拳銃", "軍用コレクション", "ミリタリー");

    let antique = evaluate_antique(&RuleTables::builtin(), &EngineConfig::default(), &product, &[], now());
    assert!(!antique.compliant);
    assert_eq!(antique.risk_level, RiskLevel::Prohibited);
    assert!(!antique.violations.is_empty());

    // Even a wildcard license and a clean import picture cannot soften it.
    let wildcard = License::active(
        UserId::new(),
        LicenseScope::All,
        Timestamp::parse("2024-01-01T00:00:00Z").unwrap(),
        None,
    );
    let verdict = engine().evaluate(&product, &[wildcard], None, &[], now());
    assert_eq!(verdict.status, ComplianceStatus::Prohibited);
    assert_eq!(verdict.risk_score, 1.0);
    assert!(verdict
        .prohibited_reasons
        .iter()
        .any(|r| r.source == RuleSource::AntiqueDealer));
}

// ─── Missing license ─────────────────────────────────────────────────

#[test]
fn antique_camera_without_license_needs_license() {
    let product = Product::new("古物 カメラ", "Nikon F3 完動品", "カメラ");

    let antique = evaluate_antique(&RuleTables::builtin(), &EngineConfig::default(), &product, &[], now());
    assert!(antique.requires_license);
    assert!(!antique.compliant);
    assert!(!antique.has_valid_license);
    assert_eq!(antique.risk_level, RiskLevel::High);

    let verdict = engine().evaluate(&product, &[], None, &[], now());
    assert_eq!(verdict.status, ComplianceStatus::NeedsLicense);
    assert!(verdict
        .required_licenses
        .iter()
        .any(|l| l.name.contains("古物商許可")));
}

#[test]
fn antique_camera_with_covering_license_is_compliant() {
    let product = Product::new("古物 カメラ", "Nikon F3 完動品", "カメラ");
    let license = License::active(
        UserId::new(),
        LicenseScope::of([DealerCategory::Cameras]),
        Timestamp::parse("2024-01-01T00:00:00Z").unwrap(),
        Some(Timestamp::parse("2028-01-01T00:00:00Z").unwrap()),
    );
    let verdict = engine().evaluate(&product, &[license], None, &[], now());
    assert_eq!(verdict.status, ComplianceStatus::Compliant);
    assert!(verdict.required_licenses.is_empty());
}

// ─── Compliant new electronics ───────────────────────────────────────

#[test]
fn new_electronics_are_compliant() {
    let product = Product::new("New Bluetooth Speaker", "sealed retail box", "Audio");
    let verdict = engine().evaluate(&product, &[], None, &[], now());

    assert_eq!(verdict.status, ComplianceStatus::Compliant);
    assert!(verdict.risk_score <= 0.3);
    assert!(verdict.required_licenses.is_empty());
    assert!(verdict.required_documents.is_empty());
    assert!(verdict.prohibited_reasons.is_empty());
    // Both synthetic rule entries are present and unmatched.
    assert_eq!(verdict.rule_results.len(), 2);
    assert!(verdict.rule_results.iter().all(|r| !r.matched));
}

// ─── Sanctioned origin override ──────────────────────────────────────

#[test]
fn sanctioned_origin_prohibits_any_product() {
    let product = Product::new("New Bluetooth Speaker", "sealed retail box", "Audio");
    let verdict = engine().evaluate(&product, &[], Some("北朝鮮"), &[], now());

    assert_eq!(verdict.status, ComplianceStatus::Prohibited);
    assert!(verdict
        .prohibited_reasons
        .iter()
        .any(|r| r.source == RuleSource::ImportRestriction));
}

// ─── Mixed pipeline ──────────────────────────────────────────────────

#[test]
fn restricted_import_with_freeform_rules() {
    let product = Product::new("中古 腕時計とウイスキーのセット", "", "").with_retail_price(30_000.0);
    let freeform = vec![RegulationRule {
        id: "labeling-jp".into(),
        rule_type: "labeling".into(),
        title: "Japanese labeling required".into(),
        risk_level: RiskLevel::Medium,
        description: "Consumer goods must carry Japanese labeling.".into(),
        required_documents: vec![],
    }];
    let verdict = engine().evaluate(&product, &[], None, &freeform, now());

    // Antique (no license) and pharma restriction both demand licenses.
    assert_eq!(verdict.status, ComplianceStatus::NeedsLicense);
    assert_eq!(verdict.rule_results.len(), 3);
    assert!(verdict.required_licenses.len() >= 2);
    assert_eq!(verdict.risk_score, 0.8);
}

#[test]
fn quick_status_agrees_with_full_verdict_across_scenarios() {
    let eng = engine();
    let cases = [
        Product::new("New Bluetooth Speaker", "sealed", "Audio"),
        Product::new("古物 カメラ", "", ""),
        Product::new("中古 拳銃", "", ""),
        Product::new("サプリメント", "", ""),
    ];
    for product in &cases {
        let status = eng.quick_status(product, &[], None, &[], now());
        let verdict = eng.evaluate(product, &[], None, &[], now());
        assert_eq!(status, verdict.status, "mismatch for {}", product.name);
    }
}
