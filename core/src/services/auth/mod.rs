//! Account authentication module
//!
//! This module provides the user-facing credential flows:
//! - Registration and login with lifecycle-state gating
//! - Idempotent logout
//! - Password changes and anti-enumeration password resets
//! - Email verification codes

mod config;
mod login_policy;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use login_policy::{evaluate, LoginDecision};
pub use service::{AccountAuthService, EmailVerificationOutcome};
