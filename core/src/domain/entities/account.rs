//! Account entity representing a registered user of the Qingyu platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default role assigned to newly registered accounts
pub const DEFAULT_ROLE: &str = "reader";

/// Lifecycle state of an account
///
/// Mutated only by administrative or verification actions; the login gate
/// reads it but never transitions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account may log in
    Active,
    /// Registered but not yet activated (email unverified)
    Inactive,
    /// Blocked by an administrator
    Banned,
    /// Soft-deleted
    Deleted,
}

/// Account entity representing a registered user
///
/// The password hash is never serialized; outward representations go through
/// `AccountProfile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// One-way hash of the password; excluded from every serialized form
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Lifecycle state governing login
    pub status: AccountStatus,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Whether the phone number has been verified
    pub phone_verified: bool,

    /// Role names carried into session credential claims
    pub roles: Vec<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the last successful login
    pub last_login_at: Option<DateTime<Utc>>,

    /// Client IP of the last successful login
    pub last_login_ip: Option<String>,
}

impl Account {
    /// Creates a new account with the default role and an `Active` state
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            phone: None,
            password_hash,
            status: AccountStatus::Active,
            email_verified: false,
            phone_verified: false,
            roles: vec![DEFAULT_ROLE.to_string()],
            created_at: now,
            updated_at: now,
            last_login_at: None,
            last_login_ip: None,
        }
    }

    /// Marks the email address as verified
    pub fn verify_email(&mut self) {
        self.email_verified = true;
        self.updated_at = Utc::now();
    }

    /// Bans the account
    pub fn ban(&mut self) {
        self.status = AccountStatus::Banned;
        self.updated_at = Utc::now();
    }

    /// Records a successful login
    pub fn touch_login(&mut self, ip: &str) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.last_login_ip = Some(ip.to_string());
        self.updated_at = now;
    }

    /// Checks whether the account is in the `Active` state
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Checks whether the account carries the given role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
