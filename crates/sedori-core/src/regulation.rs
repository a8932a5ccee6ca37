//! # Freeform Regulation Rules
//!
//! Rules authored in the regulation-rule store by compliance staff, as
//! opposed to the built-in antique and import tables. The store pre-filters
//! them by keyword overlap with the product text before evaluation, so by
//! the time a rule reaches the combiner it is considered matched and
//! contributes its own static risk level.

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// One freeform rule selected for a product by the upstream keyword filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulationRule {
    /// Stable rule identifier from the rule store.
    pub id: String,
    /// Rule classification (e.g., "labeling", "safety", "export").
    pub rule_type: String,
    /// Human-readable title.
    pub title: String,
    /// Severity this rule contributes when matched.
    pub risk_level: RiskLevel,
    /// What the rule demands, shown to the seller.
    pub description: String,
    /// Documents the rule requires, if any.
    #[serde(default)]
    pub required_documents: Vec<String>,
}
