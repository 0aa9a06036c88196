//! Password hashing backed by bcrypt.

use crate::errors::{DomainError, DomainResult};

/// One-way password hasher
///
/// bcrypt embeds a per-call random salt in the output, so two hashes of the
/// same plaintext never match byte-for-byte, and its verify path compares in
/// constant time.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost factor
    ///
    /// Tests use the minimum cost to keep hashing fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    ///
    /// A hashing failure (cost misconfiguration, RNG failure) is an internal
    /// error and aborts the calling operation; there is no plaintext fallback.
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// A malformed stored hash verifies as false rather than erroring, so a
    /// corrupted credential row reads as a failed login, not a 500.
    pub fn verify(&self, hash: &str, plaintext: &str) -> bool {
        match bcrypt::verify(plaintext, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    event = "password_hash_unparseable",
                    "Stored password hash could not be parsed"
                );
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
