//! # Engine Facade
//!
//! Owns one set of rule tables and one configuration, and runs the full
//! pipeline: both rule sets, then the combiner. Construct one engine at
//! process start and share it by reference; evaluation borrows it
//! immutably, so any number of products can be evaluated concurrently
//! with no coordination.

use sedori_core::{ComplianceStatus, License, Product, RegulationRule, Timestamp};
use sedori_rules::RuleTables;

use crate::antique::evaluate_antique;
use crate::combine::{combine, ComplianceVerdict};
use crate::config::EngineConfig;
use crate::import::evaluate_import;

/// The assembled evaluation engine.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    tables: RuleTables,
    config: EngineConfig,
}

impl ComplianceEngine {
    /// Build an engine from explicit tables and configuration.
    pub fn new(tables: RuleTables, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    /// Build an engine with the shipped tables and default configuration.
    pub fn builtin() -> Self {
        Self::new(RuleTables::builtin(), EngineConfig::default())
    }

    /// The engine's rule tables.
    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one full evaluation: antique rule set, import rule set, then
    /// the combiner.
    ///
    /// `now` is supplied by the caller and used both for license expiry
    /// decisions and as the verdict's `evaluated_at`, so a single instant
    /// governs the whole run.
    pub fn evaluate(
        &self,
        product: &Product,
        licenses: &[License],
        origin_country: Option<&str>,
        freeform: &[RegulationRule],
        now: Timestamp,
    ) -> ComplianceVerdict {
        let antique = evaluate_antique(&self.tables, &self.config, product, licenses, now);
        let import = evaluate_import(&self.tables, &self.config, product, origin_country);
        combine(&self.config, &antique, &import, freeform, now)
    }

    /// The coarse status alone, for callers that only need a gate check.
    pub fn quick_status(
        &self,
        product: &Product,
        licenses: &[License],
        origin_country: Option<&str>,
        freeform: &[RegulationRule],
        now: Timestamp,
    ) -> ComplianceStatus {
        self.evaluate(product, licenses, origin_country, freeform, now)
            .status
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
