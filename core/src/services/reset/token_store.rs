//! Password reset token issuance and validation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::reset_token::{
    ResetTokenRecord, RESET_TOKEN_BYTES, RESET_TOKEN_EXPIRATION_MINUTES,
};
use crate::errors::{DomainResult, ResetTokenError};

/// Store issuing and validating single-use password reset tokens
///
/// Same redeem-then-consume split as the verification code store: `mark_used`
/// is the commit step, called only after the caller has applied its side
/// effect. The store is constructed explicitly and injected; request-scoped
/// services share one table through an `Arc`.
#[async_trait]
pub trait ResetTokenStore: Send + Sync {
    /// Generate and store a fresh token for the address, replacing any prior
    /// record for that address
    async fn issue_token(&self, address: &str) -> DomainResult<String>;

    /// Check a presented token without consuming it
    async fn validate_token(&self, address: &str, token: &str) -> DomainResult<()>;

    /// Consume the live record for the address
    async fn mark_used(&self, address: &str) -> DomainResult<()>;

    /// Remove records that expired before `now`; returns how many were removed
    async fn sweep(&self, now: DateTime<Utc>) -> usize;
}

/// Concurrent in-memory reset token store
///
/// One map behind one read/write lock; validation takes the read lock,
/// everything else the write lock. No durability across restarts.
pub struct PasswordResetTokenStore {
    records: RwLock<HashMap<String, ResetTokenRecord>>,
    expiration_minutes: i64,
}

impl PasswordResetTokenStore {
    /// Create a store with the default 1-hour token lifetime
    pub fn new() -> Self {
        Self::with_expiration(RESET_TOKEN_EXPIRATION_MINUTES)
    }

    /// Create a store with a custom token lifetime in minutes
    pub fn with_expiration(expiration_minutes: i64) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            expiration_minutes,
        }
    }

    /// Generate a 64-character lowercase hex token from 32 random bytes
    pub fn generate_secure_token() -> String {
        let mut bytes = [0u8; RESET_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Issue a token with an explicit lifetime, bypassing the store default
    pub async fn issue_token_with_expiration(
        &self,
        address: &str,
        expiration_minutes: i64,
    ) -> DomainResult<String> {
        let token = Self::generate_secure_token();
        let record = ResetTokenRecord::new_with_expiration(
            address.to_string(),
            token.clone(),
            expiration_minutes,
        );

        let mut records = self.records.write().await;
        records.insert(address.to_string(), record);

        tracing::info!(
            address = address,
            event = "reset_token_issued",
            "Issued password reset token"
        );
        Ok(token)
    }

    /// Number of records currently held (live or expired-but-unswept)
    pub async fn live_len(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for PasswordResetTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResetTokenStore for PasswordResetTokenStore {
    async fn issue_token(&self, address: &str) -> DomainResult<String> {
        self.issue_token_with_expiration(address, self.expiration_minutes)
            .await
    }

    async fn validate_token(&self, address: &str, token: &str) -> DomainResult<()> {
        let records = self.records.read().await;
        // an absent record and a wrong token are indistinguishable to the caller
        let record = records.get(address).ok_or(ResetTokenError::Invalid)?;

        if !constant_time_eq(record.token.as_bytes(), token.as_bytes()) {
            tracing::warn!(
                address = address,
                event = "reset_token_mismatch",
                "Reset token mismatch"
            );
            return Err(ResetTokenError::Invalid.into());
        }
        if record.used {
            return Err(ResetTokenError::AlreadyUsed.into());
        }
        if record.is_expired() {
            return Err(ResetTokenError::Expired.into());
        }
        Ok(())
    }

    async fn mark_used(&self, address: &str) -> DomainResult<()> {
        let mut records = self.records.write().await;
        let record = records.get_mut(address).ok_or(ResetTokenError::NotFound)?;
        record.mark_as_used();
        Ok(())
    }

    async fn sweep(&self, now: DateTime<Utc>) -> usize {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| record.expires_at >= now);
        let removed = before - records.len();
        if removed > 0 {
            tracing::debug!(
                removed = removed,
                event = "reset_tokens_swept",
                "Swept expired reset tokens"
            );
        }
        removed
    }
}
