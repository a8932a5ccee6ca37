//! # Rule Tables — The Engine's Read-Only Configuration
//!
//! Bundles every reference table into one value constructed once at
//! process start and passed by reference into each evaluation call. No
//! table lives in process-wide state, so concurrent evaluations share
//! nothing mutable and a test can swap in a custom table set without
//! touching globals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sedori_core::DealerCategory;

use crate::antique::{antique_terms, category_keywords, prohibited_items, ProhibitedItem};
use crate::import::{
    builtin_import_restrictions, preferential_origins, sanctioned_origins, ImportRestriction,
    OriginList,
};

/// The complete immutable reference data set for one engine instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTables {
    /// Terms that classify an item as antique/used.
    pub antique_terms: Vec<String>,
    /// Classification keywords per dealer category.
    pub category_keywords: BTreeMap<DealerCategory, Vec<String>>,
    /// Goods classes a dealer may not handle.
    pub prohibited_items: Vec<ProhibitedItem>,
    /// The import-restriction table.
    pub import_restrictions: Vec<ImportRestriction>,
    /// Origins under a comprehensive import ban.
    pub sanctioned_origins: OriginList,
    /// Origins eligible for preferential tariff treatment.
    pub preferential_origins: OriginList,
}

impl RuleTables {
    /// Assemble the shipped tables.
    pub fn builtin() -> Self {
        Self {
            antique_terms: antique_terms(),
            category_keywords: category_keywords(),
            prohibited_items: prohibited_items(),
            import_restrictions: builtin_import_restrictions(),
            sanctioned_origins: sanctioned_origins(),
            preferential_origins: preferential_origins(),
        }
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::builtin()
    }
}
