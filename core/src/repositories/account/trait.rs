//! Account repository trait defining the interface for account persistence.
//!
//! The core treats absence as data: lookups return `Ok(None)` and existence
//! checks return `Ok(false)` rather than erroring, so flows where a missing
//! account is expected (password-reset requests) can handle it as a branch.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::account_patch::AccountPatch;
use crate::errors::DomainError;

/// Repository trait for account persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the boundary between the domain and infrastructure layers.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by login name
    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by email address
    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// Fails with a conflict error when the username or email is already
    /// taken.
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Apply a partial update to an account
    async fn update(&self, id: Uuid, patch: AccountPatch) -> Result<(), DomainError>;

    /// Replace the stored password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError>;

    /// Replace the stored password hash, addressed by email
    async fn update_password_by_email(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), DomainError>;

    /// Set the email-verified flag
    async fn set_email_verified(&self, id: Uuid, verified: bool) -> Result<(), DomainError>;

    /// Record the timestamp and client IP of a successful login
    async fn update_last_login(&self, id: Uuid, ip: &str) -> Result<(), DomainError>;

    /// Check whether a username is taken
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Check whether an email address is taken
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
