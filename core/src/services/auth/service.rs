//! Account auth service orchestrating the credential lifecycle flows.

use std::sync::Arc;
use uuid::Uuid;

use qy_shared::utils::validation::validators;

use crate::domain::entities::account::Account;
use crate::domain::value_objects::auth_response::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::notification::Notifier;
use crate::services::password::{PasswordHasher, PasswordPolicy};
use crate::services::reset::ResetTokenStore;
use crate::services::token::TokenService;
use crate::services::verification::CodeStore;

use super::config::AuthServiceConfig;
use super::login_policy::{self, LoginDecision};

/// Outcome of a verification-email request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailVerificationOutcome {
    /// A fresh code was issued and handed to the notifier
    CodeSent,
    /// The address is already verified; nothing was issued
    AlreadyVerified,
}

/// Account auth service for the user-facing credential flows
///
/// Orchestrates registration, login, logout, password changes, password
/// resets and email verification over the injected persistence, notification
/// and token-store boundaries.
pub struct AccountAuthService<R, N, C, P>
where
    R: AccountRepository,
    N: Notifier,
    C: CodeStore,
    P: ResetTokenStore,
{
    /// Account repository for persistence operations
    account_repository: Arc<R>,
    /// Notification boundary for out-of-band delivery
    notifier: Arc<N>,
    /// Store for email verification codes
    code_store: Arc<C>,
    /// Store for password reset tokens
    reset_token_store: Arc<P>,
    /// Session credential issuer
    token_service: Arc<TokenService>,
    /// Password hashing
    password_hasher: PasswordHasher,
    /// Password strength policy
    password_policy: PasswordPolicy,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<R, N, C, P> AccountAuthService<R, N, C, P>
where
    R: AccountRepository,
    N: Notifier,
    C: CodeStore,
    P: ResetTokenStore,
{
    /// Create a new account auth service
    pub fn new(
        account_repository: Arc<R>,
        notifier: Arc<N>,
        code_store: Arc<C>,
        reset_token_store: Arc<P>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        let password_policy = PasswordPolicy::with_rules(config.password_rules.clone());
        Self {
            account_repository,
            notifier,
            code_store,
            reset_token_store,
            token_service,
            password_hasher: PasswordHasher::new(),
            password_policy,
            config,
        }
    }

    /// Replace the password hasher (tests use a low-cost hasher)
    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.password_hasher = hasher;
        self
    }

    /// Register a new account
    ///
    /// Existence checks run before hashing so duplicate requests fail fast;
    /// the created account starts in the `Active` state with the configured
    /// default role and receives a session credential immediately.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        // Step 1: Validate the request
        if !self.config.allow_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }
        if !validators::is_valid_username(username) {
            return Err(DomainError::Validation {
                message: "Invalid username".to_string(),
            });
        }
        if !validators::is_valid_email(email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        self.password_policy.validate_strength(password)?;

        // Step 2: Check uniqueness before spending a hash
        if self.account_repository.exists_by_username(username).await? {
            return Err(AuthError::UsernameTaken.into());
        }
        if self.account_repository.exists_by_email(email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        // Step 3: Hash the password and persist the account
        let password_hash = self.password_hasher.hash(password)?;
        let mut account = Account::new(username.to_string(), email.to_string(), password_hash);
        account.roles = vec![self.config.default_role.clone()];
        let account = self.account_repository.create(account).await?;

        tracing::info!(
            account_id = %account.id,
            event = "account_registered",
            "Registered new account"
        );

        // Step 4: Issue the session credential
        let credential = self.token_service.issue_credential(&account)?;
        Ok(AuthResponse::new(&account, credential))
    }

    /// Authenticate and issue a session credential
    ///
    /// An unknown username and a wrong password both surface as
    /// `AuthError::BadCredential`; the internal cause is only logged.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        client_ip: Option<&str>,
    ) -> DomainResult<AuthResponse> {
        // Step 1: Validate the request
        if !validators::not_empty(username) || !validators::not_empty(password) {
            return Err(DomainError::Validation {
                message: "Username and password are required".to_string(),
            });
        }

        // Step 2: Load the account; absence is data, not a fault
        let account = match self.account_repository.get_by_username(username).await? {
            Some(account) => account,
            None => {
                tracing::warn!(
                    username = username,
                    event = "login_unknown_user",
                    "Login attempt for unknown username"
                );
                return Err(AuthError::BadCredential.into());
            }
        };

        // Step 3: Verify the credential, then gate on lifecycle state
        let credential_match = self
            .password_hasher
            .verify(&account.password_hash, password);
        match login_policy::evaluate(account.status, credential_match) {
            LoginDecision::Accept => {}
            LoginDecision::Reject(reason) => {
                tracing::warn!(
                    account_id = %account.id,
                    reason = %reason,
                    event = "login_rejected",
                    "Login rejected"
                );
                return Err(reason.into());
            }
        }

        // Step 4: Best-effort last-login bookkeeping
        let ip = client_ip.unwrap_or("unknown");
        if let Err(e) = self
            .account_repository
            .update_last_login(account.id, ip)
            .await
        {
            tracing::warn!(
                account_id = %account.id,
                error = %e,
                event = "last_login_update_failed",
                "Failed to record last login, continuing"
            );
        }

        // Step 5: Issue the session credential
        let credential = self.token_service.issue_credential(&account)?;
        tracing::info!(
            account_id = %account.id,
            event = "login_succeeded",
            "Login succeeded"
        );
        Ok(AuthResponse::new(&account, credential))
    }

    /// Log out
    ///
    /// Idempotent: always succeeds, with or without a presented credential.
    /// Session credentials are stateless and are not revoked here.
    pub async fn logout(&self) -> DomainResult<()> {
        Ok(())
    }

    /// Change the password, authorized by the old password
    pub async fn change_password(
        &self,
        account_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        // Step 1: Load the account
        let account = self
            .account_repository
            .get_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Step 2: The old password authorizes the change
        if !self
            .password_hasher
            .verify(&account.password_hash, old_password)
        {
            return Err(AuthError::OldPasswordMismatch.into());
        }

        // Step 3: The new password must satisfy the policy
        self.password_policy.validate_strength(new_password)?;

        // Step 4: Hash and persist
        let password_hash = self.password_hasher.hash(new_password)?;
        self.account_repository
            .update_password(account_id, &password_hash)
            .await?;

        tracing::info!(
            account_id = %account_id,
            event = "password_changed",
            "Password changed"
        );
        Ok(())
    }

    /// Request a password reset token for an email address
    ///
    /// Always reports success so callers cannot probe which addresses are
    /// registered. A token is issued, and delivery attempted, only when the
    /// account exists; delivery failure does not roll back issuance.
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<()> {
        if !validators::not_empty(email) {
            return Err(DomainError::Validation {
                message: "Email is required".to_string(),
            });
        }

        let account = match self.account_repository.get_by_email(email).await? {
            Some(account) => account,
            None => {
                tracing::debug!(
                    event = "reset_requested_for_unknown_email",
                    "Password reset requested for unknown email, reporting success"
                );
                return Ok(());
            }
        };

        let token = self.reset_token_store.issue_token(&account.email).await?;
        if let Err(e) = self
            .notifier
            .send_password_reset_email(&account.email, &token)
            .await
        {
            tracing::warn!(
                account_id = %account.id,
                error = %e,
                event = "reset_email_delivery_failed",
                "Reset email delivery failed, token remains issued"
            );
        }
        Ok(())
    }

    /// Complete a password reset with a previously issued token
    ///
    /// The token is consumed before the new hash is persisted; if consumption
    /// fails the password is left untouched.
    pub async fn confirm_password_reset(
        &self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        // Step 1: Re-validate the token
        self.reset_token_store.validate_token(email, token).await?;

        // Step 2: The new password must satisfy the policy before the token
        // is spent, so a weak password does not burn the token
        self.password_policy.validate_strength(new_password)?;

        // Step 3: Consume the token; failure here aborts the reset
        self.reset_token_store.mark_used(email).await?;

        // Step 4: Hash and persist
        let password_hash = self.password_hasher.hash(new_password)?;
        self.account_repository
            .update_password_by_email(email, &password_hash)
            .await?;

        tracing::info!(event = "password_reset_completed", "Password reset completed");
        Ok(())
    }

    /// Issue an email verification code for an account
    pub async fn send_email_verification(
        &self,
        account_id: Uuid,
        email: &str,
    ) -> DomainResult<EmailVerificationOutcome> {
        // Step 1: Load the account
        let account = self
            .account_repository
            .get_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Step 2: Nothing to do for an already-verified address
        if account.email_verified {
            return Ok(EmailVerificationOutcome::AlreadyVerified);
        }

        // Step 3: The requested address must be the one on file
        if account.email != email {
            return Err(AuthError::EmailMismatch.into());
        }

        // Step 4: Issue and hand to the notifier; delivery is best-effort
        let code = self.code_store.issue_code(account.id, &account.email).await?;
        if let Err(e) = self
            .notifier
            .send_verification_email(&account.email, &code)
            .await
        {
            tracing::warn!(
                account_id = %account.id,
                error = %e,
                event = "verification_email_delivery_failed",
                "Verification email delivery failed, code remains issued"
            );
        }
        Ok(EmailVerificationOutcome::CodeSent)
    }

    /// Verify an email address with a previously issued code
    ///
    /// Redeem, consume, then flip the verified flag — in that order, so a
    /// redemption failure never mutates account state and a consumption
    /// failure aborts before the flag is set.
    pub async fn verify_email(&self, account_id: Uuid, code: &str) -> DomainResult<()> {
        // Step 1: Load the account to learn the address on file
        let account = self
            .account_repository
            .get_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        // Step 2: Redeem the code
        self.code_store
            .redeem_code(account.id, &account.email, code)
            .await?;

        // Step 3: Consume it; failure here aborts the verification
        self.code_store.mark_used(&account.email).await?;

        // Step 4: Flip the flag
        self.account_repository
            .set_email_verified(account.id, true)
            .await?;

        tracing::info!(
            account_id = %account.id,
            event = "email_verified",
            "Email address verified"
        );
        Ok(())
    }
}
