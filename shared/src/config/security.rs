//! Password rule configuration

use serde::{Deserialize, Serialize};

/// Password rule configuration
///
/// Controls which character classes the password policy enforces. Special
/// characters are scored but not required by default.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordRuleConfig {
    /// Minimum password length
    pub min_length: usize,

    /// Require at least one uppercase letter
    pub require_uppercase: bool,

    /// Require at least one lowercase letter
    pub require_lowercase: bool,

    /// Require at least one digit
    pub require_digit: bool,

    /// Require at least one special character
    #[serde(default)]
    pub require_special: bool,
}

impl Default for PasswordRuleConfig {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: false,
        }
    }
}
