//! Outbound notification boundary.
//!
//! Delivery is an external collaborator; the core only hands codes and tokens
//! across this trait. Delivery failures are non-fatal to issuance: the stored
//! record stands and the failure is logged by the caller.

use async_trait::async_trait;

/// Trait for delivering verification codes and reset tokens
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver an email verification code; returns a provider message id
    async fn send_verification_email(&self, address: &str, code: &str) -> Result<String, String>;

    /// Deliver a password reset token; returns a provider message id
    async fn send_password_reset_email(&self, address: &str, token: &str)
        -> Result<String, String>;
}

/// Notifier that performs no delivery
///
/// Stands in for the unimplemented delivery channel of the reference
/// deployment; logs the would-be send and reports success.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send_verification_email(&self, address: &str, _code: &str) -> Result<String, String> {
        tracing::debug!(
            address = address,
            event = "verification_email_skipped",
            "No delivery channel configured, skipping verification email"
        );
        Ok("noop".to_string())
    }

    async fn send_password_reset_email(
        &self,
        address: &str,
        _token: &str,
    ) -> Result<String, String> {
        tracing::debug!(
            address = address,
            event = "reset_email_skipped",
            "No delivery channel configured, skipping reset email"
        );
        Ok("noop".to_string())
    }
}
