//! Session credential entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer tag
pub const JWT_ISSUER: &str = "qingyu";

/// Default session token expiry (24 hours)
pub const SESSION_TOKEN_EXPIRY_SECONDS: i64 = 86400;

/// Claims structure for the session credential payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Login name of the subject
    pub username: String,

    /// Role names granted to the subject
    pub roles: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for a session credential
    pub fn new_session(
        account_id: Uuid,
        username: &str,
        roles: Vec<String>,
        expiry_seconds: i64,
        issuer: &str,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: account_id.to_string(),
            username: username.to_string(),
            roles,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Stateless session credential issued after a successful login
///
/// Never persisted by the core; validity is entirely a function of the
/// signature and the embedded expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredential {
    /// Signed JWT
    pub token: String,

    /// Seconds until the token expires
    pub expires_in: i64,

    /// Claims embedded in the token
    pub claims: Claims,
}
