//! Session credential issuance and verification.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{Claims, SessionCredential};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Issues signed session credentials after a successful login
///
/// The core holds no record of issued credentials; validity is entirely a
/// function of the signature and the embedded expiry.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
        }
    }

    /// Issue a session credential for an authenticated account
    pub fn issue_credential(&self, account: &Account) -> DomainResult<SessionCredential> {
        let claims = Claims::new_session(
            account.id,
            &account.username,
            account.roles.clone(),
            self.config.token_expiry_seconds,
            &self.config.issuer,
        );

        let header = Header::new(self.config.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(SessionCredential {
            token,
            expires_in: self.config.token_expiry_seconds,
            claims,
        })
    }
}

/// Verifies session credentials on behalf of authorization middleware
///
/// Checks the signature and the exp/nbf window against the configured issuer.
/// Revocation-list checking is intentionally absent; logout does not revoke.
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionVerifier {
    /// Creates a verifier matching a token service configuration
    pub fn new(config: &TokenServiceConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify a presented credential and return its claims
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::ImmatureSignature => {
                        DomainError::Token(TokenError::TokenNotYetValid)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account() -> Account {
        let mut account = Account::new(
            "inkstone".to_string(),
            "inkstone@example.com".to_string(),
            "hash".to_string(),
        );
        account.roles.push("author".to_string());
        account
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let config = TokenServiceConfig::default();
        let service = TokenService::new(config.clone());
        let verifier = SessionVerifier::new(&config);
        let account = test_account();

        let credential = service.issue_credential(&account).unwrap();
        assert_eq!(credential.expires_in, config.token_expiry_seconds);

        let claims = verifier.verify(&credential.token).unwrap();
        assert_eq!(claims.sub, account.id.to_string());
        assert_eq!(claims.username, "inkstone");
        assert_eq!(claims.roles, vec!["reader".to_string(), "author".to_string()]);
        assert_eq!(claims.iss, "qingyu");
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = TokenServiceConfig::default();
        let service = TokenService::new(config.clone());
        let verifier = SessionVerifier::new(&config);

        let credential = service.issue_credential(&test_account()).unwrap();
        let mut tampered = credential.token.clone();
        tampered.pop();

        assert!(verifier.verify(&tampered).is_err());
        assert!(verifier.verify("not-a-jwt").is_err());
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let config = TokenServiceConfig::default();
        let service = TokenService::new(TokenServiceConfig {
            jwt_secret: "some-other-secret".to_string(),
            ..TokenServiceConfig::default()
        });
        let verifier = SessionVerifier::new(&config);

        let credential = service.issue_credential(&test_account()).unwrap();
        let err = verifier.verify(&credential.token).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Token(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = TokenServiceConfig {
            token_expiry_seconds: -120,
            ..TokenServiceConfig::default()
        };
        let service = TokenService::new(config.clone());
        let verifier = SessionVerifier::new(&config);

        let credential = service.issue_credential(&test_account()).unwrap();
        let err = verifier.verify(&credential.token).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let issuing_config = TokenServiceConfig {
            issuer: "someone-else".to_string(),
            ..TokenServiceConfig::default()
        };
        let service = TokenService::new(issuing_config);
        let verifier = SessionVerifier::new(&TokenServiceConfig::default());

        let credential = service.issue_credential(&test_account()).unwrap();
        assert!(verifier.verify(&credential.token).is_err());
    }
}
