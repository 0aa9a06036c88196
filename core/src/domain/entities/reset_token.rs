//! Password reset token record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Number of random bytes backing a reset token
pub const RESET_TOKEN_BYTES: usize = 32;

/// Length of the rendered reset token (lowercase hex)
pub const RESET_TOKEN_LENGTH: usize = 64;

/// Default expiration time for reset tokens (1 hour)
pub const RESET_TOKEN_EXPIRATION_MINUTES: i64 = 60;

/// Ephemeral password reset token record
///
/// Single-purpose counterpart of `CodeRecord`: keyed by address only, since
/// the bearer proves identity through the token itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetTokenRecord {
    /// 64-character lowercase hex token
    pub token: String,

    /// Email address the token was issued for
    pub address: String,

    /// Timestamp when the token was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been consumed
    pub used: bool,
}

impl ResetTokenRecord {
    /// Creates a record with the default expiration
    pub fn new(address: String, token: String) -> Self {
        Self::new_with_expiration(address, token, RESET_TOKEN_EXPIRATION_MINUTES)
    }

    /// Creates a record with a custom expiration in minutes
    pub fn new_with_expiration(address: String, token: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            token,
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
