//! Verification code record for proving control of an email address.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code (ASCII digits)
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (30 minutes)
pub const CODE_EXPIRATION_MINUTES: i64 = 30;

/// Ephemeral verification code record
///
/// Owned exclusively by the code store; at most one live record exists per
/// address, and a record transitions unused → used exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    /// The 6-digit verification code
    pub code: String,

    /// Account the code was issued for
    pub subject_id: Uuid,

    /// Email address the code was sent to
    pub address: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been consumed
    pub used: bool,
}

impl CodeRecord {
    /// Creates a record with the default expiration
    pub fn new(subject_id: Uuid, address: String, code: String) -> Self {
        Self::new_with_expiration(subject_id, address, code, CODE_EXPIRATION_MINUTES)
    }

    /// Creates a record with a custom expiration in minutes
    pub fn new_with_expiration(
        subject_id: Uuid,
        address: String,
        code: String,
        expiration_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            code,
            subject_id,
            address,
            issued_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            used: false,
        }
    }

    /// Checks if the record has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Marks the record as consumed
    pub fn mark_as_used(&mut self) {
        self.used = true;
    }
}
