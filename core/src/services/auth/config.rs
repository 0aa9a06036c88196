//! Configuration for the account auth service

use qy_shared::config::security::PasswordRuleConfig;

use crate::domain::entities::account::DEFAULT_ROLE;

/// Configuration for the account auth service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Whether to allow registration of new accounts
    pub allow_registration: bool,
    /// Role granted to newly registered accounts
    pub default_role: String,
    /// Password rules enforced at registration and password changes
    pub password_rules: PasswordRuleConfig,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            allow_registration: true,
            default_role: DEFAULT_ROLE.to_string(),
            password_rules: PasswordRuleConfig::default(),
        }
    }
}
