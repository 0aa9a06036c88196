//! Typed partial update for account mutation.

use crate::domain::entities::account::AccountStatus;

/// Partial account update with one named field per updatable attribute
///
/// Replaces loosely-typed update maps at the repository boundary so the
/// mutable field set is checked at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    /// New email address
    pub email: Option<String>,

    /// New phone number (`Some(None)` clears it)
    pub phone: Option<Option<String>>,

    /// New lifecycle state
    pub status: Option<AccountStatus>,

    /// Replacement role set
    pub roles: Option<Vec<String>>,
}

impl AccountPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.status.is_none() && self.roles.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch() {
        assert!(AccountPatch::new().is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let patch = AccountPatch::new()
            .with_email("new@example.com")
            .with_status(AccountStatus::Banned);

        assert!(!patch.is_empty());
        assert_eq!(patch.email.as_deref(), Some("new@example.com"));
        assert_eq!(patch.status, Some(AccountStatus::Banned));
        assert!(patch.phone.is_none());
        assert!(patch.roles.is_none());
    }

    #[test]
    fn test_clearing_phone() {
        let patch = AccountPatch::new().with_phone(None);
        assert_eq!(patch.phone, Some(None));
    }
}
