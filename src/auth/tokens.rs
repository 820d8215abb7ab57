/**
 * Access Token Management
 *
 * Signs and verifies the bearer tokens issued at login. Tokens are JWTs
 * signed with HS256 using the configured secret; the subject claim carries
 * the user's email, which is the only identity the rest of the API needs.
 * There is no refresh flow, a client logs in again when its token expires.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AppError;

/// Tokens expire one hour after issuance
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// Claims embedded in every issued token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: u64,
    /// Issued-at time (Unix timestamp, seconds)
    pub iat: u64,
}

/// Sign a token for the given user
///
/// # Arguments
/// * `secret` - HMAC signing secret from the server config
/// * `email` - The authenticated user's email, stored as the subject
///
/// # Returns
/// The encoded JWT, valid for [`TOKEN_TTL_SECS`] seconds
pub fn create_token(secret: &str, email: &str) -> Result<String, AppError> {
    let now = unix_now();
    let claims = Claims {
        sub: email.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("failed to sign token: {e}");
        AppError::internal("token signing failed")
    })
}

/// Verify a token and return its claims
///
/// Checks the signature and the expiration. Any failure collapses into a
/// single authentication error so callers cannot probe which check failed.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("rejected token: {e}");
        AppError::auth("invalid or expired token")
    })
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
