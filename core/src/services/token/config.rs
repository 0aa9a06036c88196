//! Configuration for the token service

use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{JWT_ISSUER, SESSION_TOKEN_EXPIRY_SECONDS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Session token expiry in seconds
    pub token_expiry_seconds: i64,
    /// Issuer claim stamped into every credential
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: SESSION_TOKEN_EXPIRY_SECONDS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration
    pub fn from_shared(config: &qy_shared::JwtConfig) -> Self {
        let algorithm = match config.algorithm.as_str() {
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            _ => Algorithm::HS256,
        };
        Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            token_expiry_seconds: config.token_expiry,
            issuer: config.issuer.clone(),
        }
    }
}
