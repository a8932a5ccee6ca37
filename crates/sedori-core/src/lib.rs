//! # sedori-core — Foundational Types for the Resale Compliance Engine
//!
//! This crate is the bedrock of the compliance workspace. It defines the
//! type-system primitives every other crate builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ProductId`, `UserId`,
//!    `LicenseId`, `CheckId` are all newtypes. No bare UUIDs or strings
//!    for identifiers.
//!
//! 2. **Single `DealerCategory` enum.** One definition, 13 statutory
//!    variants, exhaustive `match` everywhere. Adding a category forces
//!    every consumer to handle it at compile time.
//!
//! 3. **Ordered `RiskLevel`.** Severity is a total order
//!    (`None < Low < Medium < High < Prohibited`), so "escalate to at
//!    least X" and "never downgrade" rules are plain `max()` calls, not
//!    string comparisons.
//!
//! 4. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so persisted check records serialize
//!    deterministically.
//!
//! 5. **`sha256_digest()` accepts only `&CanonicalBytes`.** All digest
//!    paths flow through RFC 8785 canonicalization by construction.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sedori-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod canonical;
pub mod category;
pub mod digest;
pub mod error;
pub mod identity;
pub mod license;
pub mod product;
pub mod regulation;
pub mod risk;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use category::{DealerCategory, DEALER_CATEGORY_COUNT};
pub use digest::{sha256_digest, sha256_hex, ContentDigest, DigestAlgorithm};
pub use error::SedoriError;
pub use identity::{CheckId, LicenseId, ProductId, UserId};
pub use license::{License, LicenseScope, LicenseStatus};
pub use product::Product;
pub use regulation::RegulationRule;
pub use risk::RiskLevel;
pub use status::ComplianceStatus;
pub use temporal::Timestamp;
