//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to seconds
//! precision. Check records are content-addressed, so their timestamps must
//! serialize to one canonical form: ISO8601 with a `Z` suffix and no
//! sub-second component. Local timezone offsets would produce different
//! canonical bytes for the same instant.
//!
//! Non-UTC inputs are rejected at construction by the strict parser; the
//! lenient parser converts them, for ingesting data from external
//! collaborators (license records, product feeds).
//!
//! Re-check scheduling needs day arithmetic, so the type carries
//! [`Timestamp::add_days()`] rather than exposing raw `chrono` durations
//! at call sites.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SedoriError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
/// - [`Timestamp::parse_lenient()`] — from an ISO8601 string, converting to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted, including the semantically equivalent `+00:00`. This keeps
    /// the canonical byte representation of persisted checks deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, SedoriError> {
        if !s.ends_with('Z') {
            return Err(SedoriError::Timestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| SedoriError::Timestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}")))?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// Lenient parser for external data (license expiry dates arrive with
    /// local offsets). The result is always UTC with seconds precision.
    /// For digest computation paths, prefer [`Timestamp::parse()`].
    pub fn parse_lenient(s: &str) -> Result<Self, SedoriError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| SedoriError::Timestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}")))?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, SedoriError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| SedoriError::Timestamp(format!("invalid Unix timestamp: {secs}")))?;
        Ok(Self(dt))
    }

    /// Returns this timestamp shifted by a whole number of days.
    ///
    /// Used by the re-check scheduler (status → delay table). Saturates at
    /// the chrono representable range rather than wrapping.
    pub fn add_days(&self, days: i64) -> Self {
        match self.0.checked_add_signed(Duration::days(days)) {
            Some(dt) => Self(dt),
            None => *self,
        }
    }

    /// Whole days from `self` until `other` (negative if `other` is earlier).
    ///
    /// Used for the license expiring-soon window.
    pub fn days_until(&self, other: &Timestamp) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-08-01T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
