//! Store boundary for email verification codes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::DomainResult;

/// Store issuing and redeeming single-use verification codes
///
/// Redemption and consumption are two distinct operations: callers re-validate
/// with `redeem_code`, apply their side effect, and only then `mark_used`, so
/// a failed side effect never burns the code. Implementations other than the
/// in-memory store (e.g. a TTL-capable external cache) can be swapped in
/// without touching the auth service.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Generate and store a fresh code for the address, replacing any prior
    /// record for that address. Returns the code; delivery is the caller's
    /// concern.
    async fn issue_code(&self, subject_id: Uuid, address: &str) -> DomainResult<String>;

    /// Check a presented code without consuming it
    async fn redeem_code(&self, subject_id: Uuid, address: &str, code: &str) -> DomainResult<()>;

    /// Consume the live record for the address
    async fn mark_used(&self, address: &str) -> DomainResult<()>;

    /// Remove records that expired before `now`; returns how many were removed
    async fn sweep(&self, now: DateTime<Utc>) -> usize;
}
