//! Signed access tokens.
//!
//! Tokens are HMAC-signed JWTs carrying the user ID as `sub`, the issue
//! and expiry times, and a random `jti` so two logins in the same second
//! still produce distinct tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::WebConfig;
use crate::BoardError;

/// Seconds in one day.
const SECONDS_PER_DAY: i64 = 86_400;

/// Token-related errors.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Algorithm is not one of HS256, HS384, HS512.
    #[error("unsupported JWT algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    /// Signing the token failed.
    #[error("failed to sign token: {0}")]
    Encoding(String),

    /// Signature, format or expiry check failed.
    #[error("invalid or expired token")]
    Invalid,
}

impl From<TokenError> for BoardError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::UnsupportedAlgorithm(_) => BoardError::Config(e.to_string()),
            TokenError::Encoding(_) => BoardError::Internal(e.to_string()),
            TokenError::Invalid => BoardError::Auth(e.to_string()),
        }
    }
}

/// Parse an HMAC algorithm name.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, TokenError> {
    match name.to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(TokenError::UnsupportedAlgorithm(name.to_string())),
    }
}

/// JWT claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID).
    pub sub: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

/// A freshly signed token together with its claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Encoded token.
    pub token: String,
    /// Claims embedded in the token.
    pub claims: TokenClaims,
}

/// Issues and verifies access tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    expire_days: u64,
}

impl TokenService {
    /// Create a token service from a secret key.
    pub fn new(secret: &str, algorithm: Algorithm, expire_days: u64) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            validation,
            expire_days,
        }
    }

    /// Create a token service from the web configuration.
    pub fn from_config(config: &WebConfig) -> Result<Self, TokenError> {
        let algorithm = parse_algorithm(&config.jwt_algorithm)?;
        Ok(Self::new(
            &config.jwt_secret,
            algorithm,
            config.access_token_expire_days,
        ))
    }

    /// Token validity in days.
    pub fn expire_days(&self) -> u64 {
        self.expire_days
    }

    /// Sign a new token for a user.
    pub fn issue(&self, user_id: &str) -> Result<IssuedToken, TokenError> {
        let now = Utc::now().timestamp();
        let lifetime = i64::try_from(self.expire_days)
            .unwrap_or(i64::MAX)
            .saturating_mul(SECONDS_PER_DAY);

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(lifetime),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify a token's signature and expiry and return its claims.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("JWT validation failed: {}", e);
                TokenError::Invalid
            })
    }
}
