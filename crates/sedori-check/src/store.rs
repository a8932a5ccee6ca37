//! # Check Store
//!
//! The storage interface the persistence collaborator implements, plus an
//! in-memory implementation used by tests and single-process deployments.
//!
//! Storage is append-only: every evaluation inserts a new record, and a
//! record is never updated in place. The only read patterns the engine's
//! callers need are "latest verdict for a product" (the gate check) and
//! "which products are due for re-evaluation" (the scheduler sweep).

use std::collections::HashMap;

use thiserror::Error;

use sedori_core::{ProductId, Timestamp};

use crate::record::ComplianceCheck;

/// Errors from check storage.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record with this id was already inserted. Records are immutable;
    /// re-inserting one is a caller defect, not an update.
    #[error("check {check_id} already exists")]
    DuplicateCheck {
        /// The offending record id.
        check_id: String,
    },
}

/// Append-only storage for compliance checks.
pub trait CheckStore {
    /// Insert a new record.
    fn insert(&mut self, check: ComplianceCheck) -> Result<(), StoreError>;

    /// The most recent record for a product, by `performed_at`.
    fn latest_for_product(&self, product_id: ProductId) -> Option<&ComplianceCheck>;

    /// Products whose latest record is due for re-evaluation as of `now`.
    ///
    /// Only the latest record per product counts: an old overdue record
    /// superseded by a fresh one must not re-queue the product.
    fn due_for_recheck(&self, now: Timestamp) -> Vec<&ComplianceCheck>;
}

/// In-memory append-only check store.
#[derive(Debug, Default)]
pub struct InMemoryCheckStore {
    checks: Vec<ComplianceCheck>,
}

impl InMemoryCheckStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// The latest record per product.
    fn latest_by_product(&self) -> HashMap<ProductId, &ComplianceCheck> {
        let mut latest: HashMap<ProductId, &ComplianceCheck> = HashMap::new();
        for check in &self.checks {
            match latest.get(&check.product_id) {
                Some(existing) if existing.performed_at >= check.performed_at => {}
                _ => {
                    latest.insert(check.product_id, check);
                }
            }
        }
        latest
    }
}

impl CheckStore for InMemoryCheckStore {
    fn insert(&mut self, check: ComplianceCheck) -> Result<(), StoreError> {
        if self.checks.iter().any(|c| c.id == check.id) {
            return Err(StoreError::DuplicateCheck {
                check_id: check.id.to_string(),
            });
        }
        self.checks.push(check);
        Ok(())
    }

    fn latest_for_product(&self, product_id: ProductId) -> Option<&ComplianceCheck> {
        self.checks
            .iter()
            .filter(|c| c.product_id == product_id)
            .max_by_key(|c| c.performed_at)
    }

    fn due_for_recheck(&self, now: Timestamp) -> Vec<&ComplianceCheck> {
        let mut due: Vec<&ComplianceCheck> = self
            .latest_by_product()
            .into_values()
            .filter(|c| c.is_due(now))
            .collect();
        due.sort_by_key(|c| c.performed_at);
        due
    }
}
