//! # Import-Restriction Rule Set
//!
//! Scans a product against the import-restriction table and the caller's
//! declared origin country.
//!
//! A product can match several entries at once; the verdict keeps the
//! worst outcome while paperwork accumulates across every match. Once an
//! entry (or a sanctioned origin) makes the verdict prohibited, later
//! entries can no longer soften it, but their documents and licenses are
//! still collected so the seller sees the full paperwork picture.
//!
//! Restriction is a gate, not a warning: an item that is restricted but
//! not prohibited is non-compliant until its documentation exists.

use serde::{Deserialize, Serialize};

use sedori_core::{Product, RiskLevel};
use sedori_rules::{build_corpus, matches_any, RuleTables};

use crate::combine::LegalReason;
use crate::config::{EngineConfig, TariffPolicy};

/// The statute behind origin-country bans.
pub const FOREIGN_TRADE_LAW: &str = "外国為替及び外国貿易法 (Foreign Exchange and Foreign Trade Law)";

/// Estimated customs duty for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffEstimate {
    /// HS heading the estimate is based on. Under the `Sum` policy this
    /// is the first contributing heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tariff_code: Option<String>,
    /// Ad valorem rate in percent (summed under the `Sum` policy).
    pub rate_percent: f64,
    /// Estimated duty amount.
    pub amount: f64,
    /// Currency of the amount.
    pub currency: String,
}

/// Outcome of the import-restriction evaluation for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportAssessment {
    /// Whether the product passes this rule set.
    pub compliant: bool,
    /// Worst severity found.
    pub risk_level: RiskLevel,
    /// Why import is banned, if it is.
    pub prohibited_reasons: Vec<LegalReason>,
    /// Why import is gated on paperwork, if it is.
    pub restricted_reasons: Vec<LegalReason>,
    /// Documents required across all matched entries, deduplicated.
    pub required_documents: Vec<String>,
    /// Licenses required across all matched entries, deduplicated.
    pub required_licenses: Vec<String>,
    /// Duty estimate, when a tariff-bearing entry matched and the
    /// product declares a price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tariff_estimate: Option<TariffEstimate>,
    /// Seller guidance.
    pub recommendations: Vec<String>,
}

/// Evaluate the import-restriction rule set for one product.
///
/// Pure: reads only the supplied tables, config, product, and origin.
/// An absent origin country skips the origin-override step; it is not an
/// error.
pub fn evaluate_import(
    tables: &RuleTables,
    config: &EngineConfig,
    product: &Product,
    origin_country: Option<&str>,
) -> ImportAssessment {
    let corpus = build_corpus(product);

    let mut risk_level = RiskLevel::None;
    let mut prohibited_reasons: Vec<LegalReason> = Vec::new();
    let mut restricted_reasons: Vec<LegalReason> = Vec::new();
    let mut required_documents: Vec<String> = Vec::new();
    let mut required_licenses: Vec<String> = Vec::new();
    let mut tariff_estimate: Option<TariffEstimate> = None;

    for entry in &tables.import_restrictions {
        if !matches_any(&corpus, &entry.keywords) {
            continue;
        }

        if entry.prohibited {
            prohibited_reasons.push(LegalReason {
                reason: entry.description.clone(),
                legal_basis: entry.authority.clone(),
            });
            risk_level = RiskLevel::Prohibited;
        } else if entry.restricted {
            restricted_reasons.push(LegalReason {
                reason: entry.description.clone(),
                legal_basis: entry.authority.clone(),
            });
            merge_unique(&mut required_documents, &entry.required_documents);
            merge_unique(&mut required_licenses, &entry.required_licenses);
            risk_level = risk_level.escalate(RiskLevel::High);
        }

        if let (Some(rate), Some(price)) = (entry.tariff_rate, product.retail_price) {
            let amount = price * rate / 100.0;
            if tariff_estimate.is_none() {
                tariff_estimate = Some(TariffEstimate {
                    tariff_code: entry.tariff_code.clone(),
                    rate_percent: rate,
                    amount,
                    currency: "JPY".to_string(),
                });
            } else if config.tariff_policy == TariffPolicy::Sum {
                if let Some(estimate) = tariff_estimate.as_mut() {
                    estimate.rate_percent += rate;
                    estimate.amount += amount;
                }
            }
        }
    }

    // Origin overrides. A sanctioned origin bans the import outright,
    // independent of what the text matched; a preferential origin only
    // earns a recommendation.
    let mut origin_recommendation: Option<String> = None;
    if let Some(origin) = origin_country {
        if let Some(name) = tables.sanctioned_origins.matches(origin) {
            prohibited_reasons.push(LegalReason {
                reason: format!("imports originating from {name} are comprehensively banned"),
                legal_basis: FOREIGN_TRADE_LAW.to_string(),
            });
            risk_level = RiskLevel::Prohibited;
        }
        if let Some(name) = tables.preferential_origins.matches(origin) {
            origin_recommendation = Some(format!(
                "origin {name} may qualify for preferential (GSP) tariff rates; \
                 obtain a certificate of origin"
            ));
        }
    }

    let compliant = prohibited_reasons.is_empty() && restricted_reasons.is_empty();
    if compliant && tariff_estimate.is_some() {
        // Duty applies but nothing blocks the import.
        risk_level = risk_level.escalate(RiskLevel::Low);
    }

    let mut recommendations = vec![
        "consult a customs broker before the first shipment".to_string(),
        "prepare a commercial invoice and packing list".to_string(),
    ];
    if !required_documents.is_empty() {
        recommendations
            .push("submit the required import documents before customs clearance".to_string());
    }
    if !required_licenses.is_empty() {
        recommendations
            .push("obtain the required import licenses before the shipment arrives".to_string());
    }
    if let Some(estimate) = &tariff_estimate {
        recommendations.push(format!(
            "budget for estimated customs duty of {:.0} {} ({}% ad valorem)",
            estimate.amount, estimate.currency, estimate.rate_percent
        ));
    }
    if let Some(rec) = origin_recommendation {
        recommendations.push(rec);
    }

    ImportAssessment {
        compliant,
        risk_level,
        prohibited_reasons,
        restricted_reasons,
        required_documents,
        required_licenses,
        tariff_estimate,
        recommendations,
    }
}

/// Append items not already present, preserving first-seen order.
fn merge_unique(into: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !into.contains(item) {
            into.push(item.clone());
        }
    }
}
