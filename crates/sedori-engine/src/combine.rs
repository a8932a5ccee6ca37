//! # Compliance Combiner
//!
//! Merges the antique and import assessments plus any freeform regulation
//! rules into one verdict: overall status, numeric risk score, a uniform
//! rule-result list, and the consolidated license/document/reason/
//! recommendation lists.
//!
//! Two invariants hold for every verdict:
//!
//! - **Prohibition dominates.** If any contributing rule is at
//!   `Prohibited`, the overall status is `Prohibited` no matter what the
//!   other rules concluded.
//! - **The score is a ceiling, not an average.** The risk score is the
//!   maximum of the per-rule scores, so one severe rule cannot be diluted
//!   by any number of mild ones.

use serde::{Deserialize, Serialize};

use sedori_core::{ComplianceStatus, RegulationRule, RiskLevel, Timestamp};

use crate::antique::{AntiqueAssessment, ANTIQUE_DEALER_LAW};
use crate::config::EngineConfig;
use crate::import::ImportAssessment;

/// A finding paired with the statute or authority behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReason {
    /// What was found.
    pub reason: String,
    /// The statute or authority that makes it a finding.
    pub legal_basis: String,
}

/// Which rule set produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    /// The antique-dealer rule set.
    AntiqueDealer,
    /// The import-restriction rule set.
    ImportRestriction,
}

/// One entry in the uniform rule-result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Stable rule identifier.
    pub rule_id: String,
    /// Rule classification.
    pub rule_type: String,
    /// Human-readable title.
    pub title: String,
    /// Whether the rule applied to this product.
    pub matched: bool,
    /// Severity this rule contributed.
    pub risk_level: RiskLevel,
    /// Findings, one line each.
    pub details: Vec<String>,
    /// What the seller must do to clear the rule.
    pub required_actions: Vec<String>,
    /// Non-blocking findings.
    pub warnings: Vec<String>,
}

/// The kind of license a verdict demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredLicenseKind {
    /// Antique dealer license.
    AntiqueDealer,
    /// Import license or permit.
    Import,
}

/// A license the caller must obtain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredLicense {
    /// License name as shown to the seller.
    pub name: String,
    /// Which regulation demands it.
    pub kind: RequiredLicenseKind,
}

/// A document the caller must supply.
///
/// `uploaded` is always false at evaluation time; the document-collection
/// collaborator flips it on its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredDocument {
    /// Document name as shown to the seller.
    pub name: String,
    /// Whether the seller has supplied it yet.
    pub uploaded: bool,
}

/// One reason the product is prohibited, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProhibitedReason {
    /// What was found.
    pub reason: String,
    /// The statute or authority behind it.
    pub legal_basis: String,
    /// Which rule set produced it.
    pub source: RuleSource,
}

/// How a recommendation should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    /// The seller should act on this to change the verdict.
    Actionable,
    /// Context the seller should know; no action changes the verdict.
    Informational,
}

/// A tagged recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommendation text.
    pub text: String,
    /// Presentation kind.
    pub kind: RecommendationKind,
}

/// The combined verdict for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    /// Overall status.
    pub status: ComplianceStatus,
    /// Numeric risk score in [0, 1]; the maximum per-rule score.
    pub risk_score: f64,
    /// One entry per contributing rule.
    pub rule_results: Vec<RuleOutcome>,
    /// Licenses the caller must obtain, deduplicated by name.
    pub required_licenses: Vec<RequiredLicense>,
    /// Documents the caller must supply.
    pub required_documents: Vec<RequiredDocument>,
    /// Why the product is prohibited, if it is.
    pub prohibited_reasons: Vec<ProhibitedReason>,
    /// Consolidated recommendations.
    pub recommendations: Vec<Recommendation>,
    /// When the evaluation ran.
    pub evaluated_at: Timestamp,
}

/// Merge the two rule-set assessments and any freeform rules into one
/// verdict.
///
/// Freeform rules were pre-filtered by keyword overlap upstream, so each
/// one is treated as matched and contributes its own static risk level.
pub fn combine(
    config: &EngineConfig,
    antique: &AntiqueAssessment,
    import: &ImportAssessment,
    freeform: &[RegulationRule],
    evaluated_at: Timestamp,
) -> ComplianceVerdict {
    // Uniform rule-result list: antique, import, then freeform.
    let mut rule_results = vec![antique_outcome(antique), import_outcome(import)];
    for rule in freeform {
        rule_results.push(RuleOutcome {
            rule_id: rule.id.clone(),
            rule_type: rule.rule_type.clone(),
            title: rule.title.clone(),
            matched: true,
            risk_level: rule.risk_level,
            details: vec![rule.description.clone()],
            required_actions: rule.required_documents.clone(),
            warnings: Vec::new(),
        });
    }

    // Score: ceiling over all contributing rules.
    let risk_score = rule_results
        .iter()
        .map(|entry| config.score_map.score(entry.risk_level))
        .fold(0.0_f64, f64::max);

    // Status: first matching branch wins.
    let any_prohibited = rule_results
        .iter()
        .any(|entry| entry.risk_level == RiskLevel::Prohibited);
    let any_non_compliant = !antique.compliant || !import.compliant;
    let missing_license = (antique.requires_license && !antique.has_valid_license)
        || !import.required_licenses.is_empty();

    let status = if any_prohibited {
        ComplianceStatus::Prohibited
    } else if any_non_compliant && missing_license {
        ComplianceStatus::NeedsLicense
    } else if any_non_compliant {
        ComplianceStatus::NonCompliant
    } else if risk_score > config.review_threshold {
        ComplianceStatus::RequiresReview
    } else {
        ComplianceStatus::Compliant
    };

    // Consolidated licenses, deduplicated by name.
    let mut required_licenses: Vec<RequiredLicense> = Vec::new();
    if antique.requires_license && !antique.has_valid_license {
        required_licenses.push(RequiredLicense {
            name: "古物商許可 (antique dealer license)".to_string(),
            kind: RequiredLicenseKind::AntiqueDealer,
        });
    }
    for name in &import.required_licenses {
        if !required_licenses.iter().any(|l| &l.name == name) {
            required_licenses.push(RequiredLicense {
                name: name.clone(),
                kind: RequiredLicenseKind::Import,
            });
        }
    }

    // Import documents, each awaiting upload.
    let required_documents = import
        .required_documents
        .iter()
        .map(|name| RequiredDocument {
            name: name.clone(),
            uploaded: false,
        })
        .collect();

    // Prohibited reasons, tagged with their source rule set.
    let mut prohibited_reasons: Vec<ProhibitedReason> = Vec::new();
    for violation in &antique.violations {
        prohibited_reasons.push(ProhibitedReason {
            reason: violation.reason.clone(),
            legal_basis: violation.legal_basis.clone(),
            source: RuleSource::AntiqueDealer,
        });
    }
    for reason in &import.prohibited_reasons {
        prohibited_reasons.push(ProhibitedReason {
            reason: reason.reason.clone(),
            legal_basis: reason.legal_basis.clone(),
            source: RuleSource::ImportRestriction,
        });
    }

    // Recommendations: antique guidance is actionable (it changes the
    // verdict), import guidance is informational context.
    let mut recommendations: Vec<Recommendation> = Vec::new();
    for text in &antique.recommendations {
        recommendations.push(Recommendation {
            text: text.clone(),
            kind: RecommendationKind::Actionable,
        });
    }
    for text in &import.recommendations {
        recommendations.push(Recommendation {
            text: text.clone(),
            kind: RecommendationKind::Informational,
        });
    }

    ComplianceVerdict {
        status,
        risk_score,
        rule_results,
        required_licenses,
        required_documents,
        prohibited_reasons,
        recommendations,
        evaluated_at,
    }
}

/// The synthetic rule entry for the antique assessment.
fn antique_outcome(antique: &AntiqueAssessment) -> RuleOutcome {
    let mut required_actions = Vec::new();
    if antique.requires_license && !antique.has_valid_license {
        required_actions
            .push("acquire a dealer license covering the matched categories".to_string());
    }
    RuleOutcome {
        rule_id: "antique_dealer".to_string(),
        rule_type: "antique_dealer".to_string(),
        title: ANTIQUE_DEALER_LAW.to_string(),
        matched: antique.requires_license,
        risk_level: antique.risk_level,
        details: antique.violations.iter().map(|v| v.reason.clone()).collect(),
        required_actions,
        warnings: antique.warnings.clone(),
    }
}

/// The synthetic rule entry for the import assessment.
fn import_outcome(import: &ImportAssessment) -> RuleOutcome {
    let matched = !import.prohibited_reasons.is_empty()
        || !import.restricted_reasons.is_empty()
        || import.tariff_estimate.is_some();
    let mut details: Vec<String> = Vec::new();
    details.extend(import.prohibited_reasons.iter().map(|r| r.reason.clone()));
    details.extend(import.restricted_reasons.iter().map(|r| r.reason.clone()));
    let mut required_actions: Vec<String> = import.required_documents.clone();
    required_actions.extend(import.required_licenses.iter().cloned());
    RuleOutcome {
        rule_id: "import_restrictions".to_string(),
        rule_type: "import_restriction".to_string(),
        title: "輸入規制 (Import Restrictions)".to_string(),
        matched,
        risk_level: import.risk_level,
        details,
        required_actions,
        warnings: Vec::new(),
    }
}
