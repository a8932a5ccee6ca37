//! # sedori-check — Check Persistence and Scheduling
//!
//! The contract between the evaluation core and its persistence and
//! scheduling collaborators: the immutable [`ComplianceCheck`] record,
//! the status-to-delay [`RecheckSchedule`], and the append-only
//! [`CheckStore`] interface with an in-memory implementation.
//!
//! ## Lifecycle
//!
//! One evaluation call creates one record. Records are never mutated;
//! re-evaluation inserts a new record, and the latest record per product
//! is the product's current verdict. The record's `next_check_at` tells
//! the external scheduler when to re-queue the product; this crate
//! computes dates and never runs timers.
//!
//! Evaluations that fail to complete are persisted as `Pending` records
//! via [`ComplianceCheck::pending()`], so they retry on the default delay
//! instead of being silently treated as compliant.

pub mod record;
pub mod schedule;
pub mod store;

pub use record::ComplianceCheck;
pub use schedule::RecheckSchedule;
pub use store::{CheckStore, InMemoryCheckStore, StoreError};
