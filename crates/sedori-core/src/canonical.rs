//! # Canonical Serialization — RFC 8785 Byte Production
//!
//! Defines `CanonicalBytes`, the sole construction path for bytes used in
//! digest computation. Persisted compliance checks are immutable and
//! content-addressed; two evaluations of identical inputs must produce
//! identical bytes, so all digests flow through one canonicalization
//! pipeline (sorted keys, compact separators, RFC 8785 number formatting).
//!
//! The inner field is private: the only way to obtain `CanonicalBytes` is
//! [`CanonicalBytes::new()`], so no code path can hash ad-hoc
//! `serde_json::to_vec()` output and split the canonical form.
//!
//! Float fields (risk scores, prices, tariff amounts) are permitted; they
//! are always finite because scores come from a validated score map and
//! prices from the catalog. JCS gives finite doubles a single canonical
//! rendering.

use serde::Serialize;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by RFC 8785 (JCS) canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Object keys are sorted; separators are compact.
/// - Numbers use the JCS shortest-round-trip rendering.
///
/// The inner `Vec<u8>` is private, so downstream code cannot construct a
/// non-canonical instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if JCS
    /// serialization fails (e.g., a map with non-string keys).
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let bytes = serde_jcs::to_vec(obj)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
