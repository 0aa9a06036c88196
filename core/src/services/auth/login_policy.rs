//! Login gate: a pure decision over credential match and lifecycle state.

use crate::domain::entities::account::AccountStatus;
use crate::errors::AuthError;

/// Outcome of evaluating a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginDecision {
    /// Proceed to credential issuance
    Accept,
    /// Reject with a typed reason
    Reject(AuthError),
}

/// Evaluate a login attempt against the account's lifecycle state
///
/// A credential mismatch rejects before the state is inspected, so responses
/// cannot be used as a state oracle. The function never mutates state and is
/// re-evaluated on every attempt. Adding an `AccountStatus` variant without
/// deciding its login behavior fails to compile here: nothing is accepted by
/// default.
pub fn evaluate(status: AccountStatus, credential_match: bool) -> LoginDecision {
    if !credential_match {
        return LoginDecision::Reject(AuthError::BadCredential);
    }

    match status {
        AccountStatus::Active => LoginDecision::Accept,
        AccountStatus::Inactive => LoginDecision::Reject(AuthError::AccountInactive),
        AccountStatus::Banned => LoginDecision::Reject(AuthError::AccountBanned),
        AccountStatus::Deleted => LoginDecision::Reject(AuthError::AccountDeleted),
    }
}
