//! Domain-specific error types and error handling.

mod types;

// Re-export all error-kind enumerations
pub use types::{AuthError, CodeError, PolicyViolation, ResetTokenError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// The top-level taxonomy the presentation layer maps to status codes:
/// validation, not-found, unauthorized, conflict and internal, plus
/// transparent bridges to the closed per-subsystem error kinds.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Code(#[from] CodeError),

    #[error(transparent)]
    ResetToken(#[from] ResetTokenError),

    #[error(transparent)]
    Policy(#[from] PolicyViolation),
}

pub type DomainResult<T> = Result<T, DomainError>;
