//! In-memory verification code store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_code::{CodeRecord, CODE_EXPIRATION_MINUTES};
use crate::errors::{CodeError, DomainResult};

use super::traits::CodeStore;

/// Concurrent in-memory store for email verification codes
///
/// One map behind one read/write lock: issuance, consumption and sweeping
/// take the write lock, redemption the read lock. The lock is never held
/// across I/O. Records do not survive a process restart.
pub struct VerificationCodeStore {
    records: RwLock<HashMap<String, CodeRecord>>,
    expiration_minutes: i64,
}

impl VerificationCodeStore {
    /// Create a store with the default 30-minute code lifetime
    pub fn new() -> Self {
        Self::with_expiration(CODE_EXPIRATION_MINUTES)
    }

    /// Create a store with a custom code lifetime in minutes
    pub fn with_expiration(expiration_minutes: i64) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            expiration_minutes,
        }
    }

    /// Generate a cryptographically secure random 6-digit code
    ///
    /// Uses the OS CSPRNG. The modulo bias over a 32-bit draw is negligible
    /// for a 6-digit space.
    pub fn generate_secure_code() -> String {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:06}", num)
    }

    /// Issue a code with an explicit lifetime, bypassing the store default
    ///
    /// Exists so expiry behavior can be exercised without a clock abstraction.
    pub async fn issue_code_with_expiration(
        &self,
        subject_id: Uuid,
        address: &str,
        expiration_minutes: i64,
    ) -> DomainResult<String> {
        let code = Self::generate_secure_code();
        let record = CodeRecord::new_with_expiration(
            subject_id,
            address.to_string(),
            code.clone(),
            expiration_minutes,
        );

        let mut records = self.records.write().await;
        records.insert(address.to_string(), record);

        tracing::info!(
            address = address,
            subject_id = %subject_id,
            event = "verification_code_issued",
            "Issued verification code"
        );
        Ok(code)
    }

    /// Number of records currently held (live or expired-but-unswept)
    pub async fn live_len(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for VerificationCodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeStore for VerificationCodeStore {
    async fn issue_code(&self, subject_id: Uuid, address: &str) -> DomainResult<String> {
        self.issue_code_with_expiration(subject_id, address, self.expiration_minutes)
            .await
    }

    async fn redeem_code(&self, subject_id: Uuid, address: &str, code: &str) -> DomainResult<()> {
        let records = self.records.read().await;
        let record = records.get(address).ok_or(CodeError::NotFound)?;

        if record.subject_id != subject_id {
            return Err(CodeError::SubjectMismatch.into());
        }
        if !constant_time_eq(record.code.as_bytes(), code.as_bytes()) {
            tracing::warn!(
                address = address,
                event = "verification_code_mismatch",
                "Verification code mismatch"
            );
            return Err(CodeError::Mismatch.into());
        }
        if record.used {
            return Err(CodeError::AlreadyUsed.into());
        }
        if record.is_expired() {
            return Err(CodeError::Expired.into());
        }
        Ok(())
    }

    async fn mark_used(&self, address: &str) -> DomainResult<()> {
        let mut records = self.records.write().await;
        let record = records.get_mut(address).ok_or(CodeError::NotFound)?;
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
                event = "verification_codes_swept",
                "Swept expired verification codes"
            );
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;

    const ADDRESS: &str = "writer@example.com";

    #[test]
    fn test_generated_code_format() {
        for _ in 0..100 {
            let code = VerificationCodeStore::generate_secure_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn test_issue_then_redeem() {
        let store = VerificationCodeStore::new();
        let subject = Uuid::new_v4();

        let code = store.issue_code(subject, ADDRESS).await.unwrap();
        assert!(store.redeem_code(subject, ADDRESS, &code).await.is_ok());
        // redeem does not consume
        assert!(store.redeem_code(subject, ADDRESS, &code).await.is_ok());
    }

    #[tokio::test]
    async fn test_redeem_after_mark_used_fails() {
        let store = VerificationCodeStore::new();
        let subject = Uuid::new_v4();

        let code = store.issue_code(subject, ADDRESS).await.unwrap();
        store.redeem_code(subject, ADDRESS, &code).await.unwrap();
        store.mark_used(ADDRESS).await.unwrap();

        let err = store.redeem_code(subject, ADDRESS, &code).await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::DomainError::Code(CodeError::AlreadyUsed)
        ));
    }

    #[tokio::test]
    async fn test_wrong_subject_is_rejected() {
        let store = VerificationCodeStore::new();
        let subject = Uuid::new_v4();

        let code = store.issue_code(subject, ADDRESS).await.unwrap();
        let err = store
            .redeem_code(Uuid::new_v4(), ADDRESS, &code)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::errors::DomainError::Code(CodeError::SubjectMismatch)
        ));
    }

    #[tokio::test]
    async fn test_wrong_code_is_rejected() {
        let store = VerificationCodeStore::new();
        let subject = Uuid::new_v4();

        let code = store.issue_code(subject, ADDRESS).await.unwrap();
        let wrong = if code == "000000" { "000001" } else { "000000" };
        let err = store.redeem_code(subject, ADDRESS, wrong).await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::DomainError::Code(CodeError::Mismatch)
        ));
    }

    #[tokio::test]
    async fn test_unknown_address_is_not_found() {
        let store = VerificationCodeStore::new();
        let err = store
            .redeem_code(Uuid::new_v4(), "nobody@example.com", "123456")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::errors::DomainError::Code(CodeError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_expired_code_is_rejected_even_if_unused() {
        let store = VerificationCodeStore::new();
        let subject = Uuid::new_v4();

        let code = store
            .issue_code_with_expiration(subject, ADDRESS, 0)
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let err = store.redeem_code(subject, ADDRESS, &code).await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::DomainError::Code(CodeError::Expired)
        ));
    }

    #[tokio::test]
    async fn test_reissue_invalidates_prior_code() {
        let store = VerificationCodeStore::new();
        let subject = Uuid::new_v4();

        let first = store.issue_code(subject, ADDRESS).await.unwrap();
        let second = store.issue_code(subject, ADDRESS).await.unwrap();

        assert_eq!(store.live_len().await, 1);
        assert!(store.redeem_code(subject, ADDRESS, &second).await.is_ok());
        if first != second {
            assert!(store.redeem_code(subject, ADDRESS, &first).await.is_err());
        }
    }

    #[tokio::test]
    async fn test_mark_used_without_record_fails() {
        let store = VerificationCodeStore::new();
        let err = store.mark_used("nobody@example.com").await.unwrap_err();
        assert!(matches!(
            err,
            crate::errors::DomainError::Code(CodeError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let store = VerificationCodeStore::new();
        let subject = Uuid::new_v4();

        store.issue_code(subject, "live@example.com").await.unwrap();
        store
            .issue_code_with_expiration(subject, "stale@example.com", 0)
            .await
            .unwrap();

        let removed = store.sweep(Utc::now() + Duration::milliseconds(5)).await;
        assert_eq!(removed, 1);
        assert_eq!(store.live_len().await, 1);
        assert!(store
            .redeem_code(subject, "stale@example.com", "123456")
            .await
            .is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_issuance_keeps_every_address() {
        let store = Arc::new(VerificationCodeStore::new());
        let subject = Uuid::new_v4();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let address = format!("writer{}@example.com", i);
                    store.issue_code(subject, &address).await.unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.live_len().await, 16);
    }
}
