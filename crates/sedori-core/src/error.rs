//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the compliance workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Parse failures carry the offending input value in full.
//! - Canonicalization failures carry the underlying serializer error.
//! - Evaluation itself is total and never constructs an error; the only
//!   fallible paths are construction-time (parsing, canonicalization).

use thiserror::Error;

/// Top-level error type for the compliance workspace.
#[derive(Error, Debug)]
pub enum SedoriError {
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A timestamp string could not be parsed or violated the UTC policy.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),

    /// A string did not name a known enum value (category, status, risk level).
    #[error("unknown value: {0}")]
    UnknownValue(String),

    /// A record failed structural validation.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
