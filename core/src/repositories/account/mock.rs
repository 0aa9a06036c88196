//! In-memory implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::account_patch::AccountPatch;
use crate::errors::{AuthError, DomainError};
use crate::repositories::account::AccountRepository;

/// Mock account repository backed by a HashMap
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository seeded with an account
    pub async fn with_account(account: Account) -> Self {
        let repo = Self::new();
        repo.accounts.write().await.insert(account.id, account);
        repo
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.username == username).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.username == account.username) {
            return Err(DomainError::Auth(AuthError::UsernameTaken));
        }
        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Auth(AuthError::EmailTaken));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, id: Uuid, patch: AccountPatch) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or(DomainError::NotFound {
            resource: "Account".to_string(),
        })?;

        if let Some(email) = patch.email {
            account.email = email;
        }
        if let Some(phone) = patch.phone {
            account.phone = phone;
        }
        if let Some(status) = patch.status {
            account.status = status;
        }
        if let Some(roles) = patch.roles {
            account.roles = roles;
        }
        account.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or(DomainError::NotFound {
            resource: "Account".to_string(),
        })?;
        account.password_hash = password_hash.to_string();
        account.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn update_password_by_email(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .values_mut()
            .find(|a| a.email == email)
            .ok_or(DomainError::NotFound {
                resource: "Account".to_string(),
            })?;
        account.password_hash = password_hash.to_string();
        account.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn set_email_verified(&self, id: Uuid, verified: bool) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or(DomainError::NotFound {
            resource: "Account".to_string(),
        })?;
        account.email_verified = verified;
        account.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn update_last_login(&self, id: Uuid, ip: &str) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or(DomainError::NotFound {
            resource: "Account".to_string(),
        })?;
        account.touch_login(ip);
        Ok(())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|a| a.email == email))
    }
}
