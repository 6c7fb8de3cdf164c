//! JWT service for bearer token generation and verification
//!
//! Tokens are compact HS256-signed JWTs carrying the owning user's id and
//! email. The signing secret is loaded once at startup and shared read-only
//! by every mint and verify call; verification is pure computation and
//! never suspends.

use anyhow::Result;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric signing secret
    pub secret: String,
    /// Token lifetime in milliseconds (default: 24 hours)
    pub expiration_ms: i64,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_SECRET`: symmetric signing secret
    /// - `JWT_EXPIRATION_MS`: token lifetime in milliseconds (default: 86400000)
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable not set"))?;

        let expiration_ms = std::env::var("JWT_EXPIRATION_MS")
            .unwrap_or_else(|_| "86400000".to_string())
            .parse()
            .unwrap_or(86_400_000);

        Ok(JwtConfig {
            secret,
            expiration_ms,
        })
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User ID
    pub id: i64,
    /// User email
    pub username: String,
    /// Subject, carries the same email
    pub sub: String,
    /// Issued at time (epoch seconds)
    pub iat: i64,
    /// Expiration time (epoch seconds)
    pub exp: i64,
}

/// Reasons a presented token is rejected
///
/// Each variant carries a distinct diagnostic for logging; all of them
/// collapse to an unauthenticated response at the HTTP boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("malformed token")]
    Malformed,
    #[error("invalid signature")]
    BadSignature,
    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,
    #[error("token expired")]
    Expired,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_ms: i64,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: &JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is strict: now must be before exp.
        validation.leeway = 0;

        JwtService {
            encoding_key,
            decoding_key,
            validation,
            expiration_ms: config.expiration_ms,
        }
    }

    /// Generate a token bound to a user's id and email
    pub fn generate_token(&self, user_id: i64, email: &str) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| anyhow::anyhow!("Failed to get current time: {}", e))?
            .as_secs() as i64;

        let claims = Claims {
            id: user_id,
            username: email.to_string(),
            sub: email.to_string(),
            iat: now,
            exp: now + self.expiration_ms / 1000,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify a token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenRejection> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => Err(match e.kind() {
                ErrorKind::ExpiredSignature => TokenRejection::Expired,
                ErrorKind::InvalidSignature => TokenRejection::BadSignature,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenRejection::UnsupportedAlgorithm
                }
                _ => TokenRejection::Malformed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn service_with(secret: &str, expiration_ms: i64) -> JwtService {
        JwtService::new(&JwtConfig {
            secret: secret.to_string(),
            expiration_ms,
        })
    }

    #[test]
    fn round_trip_preserves_identity_claims() {
        let service = service_with("test-secret", 86_400_000);

        let token = service.generate_token(42, "alice@example.com").unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.id, 42);
        assert_eq!(claims.username, "alice@example.com");
        assert_eq!(claims.sub, "alice@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        // A negative lifetime puts exp in the past at mint time.
        let service = service_with("test-secret", -10_000);

        let token = service.generate_token(1, "bob@example.com").unwrap();

        assert_eq!(service.verify_token(&token), Err(TokenRejection::Expired));
    }

    #[test]
    fn foreign_secret_is_rejected_as_bad_signature() {
        let minting = service_with("one-secret", 86_400_000);
        let verifying = service_with("another-secret", 86_400_000);

        let token = minting.generate_token(1, "bob@example.com").unwrap();

        assert_eq!(
            verifying.verify_token(&token),
            Err(TokenRejection::BadSignature)
        );
    }

    #[test]
    fn garbage_is_rejected_as_malformed() {
        let service = service_with("test-secret", 86_400_000);

        assert_eq!(
            service.verify_token("not-a-token"),
            Err(TokenRejection::Malformed)
        );
    }

    #[test]
    fn foreign_algorithm_is_rejected_as_unsupported() {
        let service = service_with("test-secret", 86_400_000);

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let claims = Claims {
            id: 1,
            username: "bob@example.com".to_string(),
            sub: "bob@example.com".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(
            service.verify_token(&token),
            Err(TokenRejection::UnsupportedAlgorithm)
        );
    }

    #[test]
    #[serial]
    fn config_from_env_defaults_expiration() {
        unsafe {
            std::env::set_var("JWT_SECRET", "env-secret");
            std::env::remove_var("JWT_EXPIRATION_MS");
        }

        let config = JwtConfig::from_env().unwrap();
        assert_eq!(config.secret, "env-secret");
        assert_eq!(config.expiration_ms, 86_400_000);

        unsafe {
            std::env::remove_var("JWT_SECRET");
        }
    }

    #[test]
    #[serial]
    fn config_from_env_requires_secret() {
        unsafe {
            std::env::remove_var("JWT_SECRET");
        }

        assert!(JwtConfig::from_env().is_err());
    }
}
