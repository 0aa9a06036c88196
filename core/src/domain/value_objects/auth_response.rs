//! Outward-facing account representation and authentication response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountStatus};
use crate::domain::entities::token::SessionCredential;

/// Outward representation of an account
///
/// Built by projection from `Account`; there is no credential field to leak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Login name
    pub username: String,

    /// Email address
    pub email: String,

    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Lifecycle state
    pub status: AccountStatus,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Whether the phone number has been verified
    pub phone_verified: bool,

    /// Role names
    pub roles: Vec<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last successful login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            status: account.status,
            email_verified: account.email_verified,
            phone_verified: account.phone_verified,
            roles: account.roles.clone(),
            created_at: account.created_at,
            last_login_at: account.last_login_at,
        }
    }
}

/// Authentication response returned by register and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Outward account representation
    pub account: AccountProfile,

    /// Signed session token
    pub token: String,

    /// Seconds until the token expires
    pub expires_in: i64,
}

impl AuthResponse {
    /// Builds a response from an account and its freshly issued credential
    pub fn new(account: &Account, credential: SessionCredential) -> Self {
        Self {
            account: AccountProfile::from(account),
            token: credential.token,
            expires_in: credential.expires_in,
        }
    }
}
