//! Bearer-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs containing a [`Claims`] payload:
//! the subject (the user's email) and an absolute expiration instant.
//! Tokens are stateless -- nothing is persisted server-side and a token
//! cannot be revoked before its embedded expiry.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the email of the user the token was issued for.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for token generation and validation.
///
/// The secret and algorithm (HS256) are fixed process-wide; issuer and
/// verifier read the same injected value.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in seconds (default: 1800).
    pub access_token_expiry_secs: i64,
}

/// Default access token expiry in seconds (30 minutes).
const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 1800;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `JWT_SECRET`             | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_SECS` | no       | `1800`  |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_secs: i64 = std::env::var("JWT_ACCESS_EXPIRY_SECS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_SECS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_SECS must be a valid i64");

        Self {
            secret,
            access_token_expiry_secs,
        }
    }
}

/// A freshly issued access token together with its expiration instant.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed, encoded token string handed to the client.
    pub token: String,
    /// Absolute UTC expiration embedded in the token.
    pub expires_at: DateTime<Utc>,
}

/// Generate an HS256 access token for the given subject.
///
/// Pure given config and clock: no side effects, nothing persisted.
pub fn generate_access_token(
    subject: &str,
    config: &JwtConfig,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + chrono::Duration::seconds(config.access_token_expiry_secs);

    let claims = Claims {
        sub: subject.to_string(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(IssuedToken { token, expires_at })
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration with zero leeway. A token whose
/// `exp` equals the current second counts as expired, so the boundary is
/// `expires_at <= now`.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, requires exp
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    if token_data.claims.exp <= Utc::now().timestamp() {
        return Err(jsonwebtoken::errors::ErrorKind::ExpiredSignature.into());
    }

    Ok(token_data.claims)
}
