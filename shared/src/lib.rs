//! Shared utilities and common types for Qingyu backend services
//!
//! This crate provides common functionality used across server modules:
//! - Configuration types
//! - Validation utilities

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{JwtConfig, PasswordRuleConfig};
pub use utils::validation;
