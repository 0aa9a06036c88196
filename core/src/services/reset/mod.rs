//! Password reset token issuance and validation.

mod token_store;

pub use token_store::{PasswordResetTokenStore, ResetTokenStore};
