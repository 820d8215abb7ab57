/**
 * Application Error Types
 *
 * This module defines the error taxonomy shared by the auth and sheet
 * services. Each variant corresponds to one class of failure the API can
 * report, and maps to exactly one HTTP status code.
 *
 * # Error Classes
 *
 * - `Validation` - the request body failed validation (400)
 * - `Conflict` - registration with an already-registered email (409)
 * - `Auth` - invalid credentials, or a missing/malformed/expired token (401)
 * - `NotFound` - no resource matches the id and the requesting owner (404)
 * - `Database`, `Serialization`, `Internal` - unexpected failures (500)
 *
 * The 500 class never exposes its cause to clients; `public_message` returns
 * a fixed string for it and the conversion layer logs the details.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Service-wide error type
///
/// Handlers return `Result<_, AppError>` and rely on the `IntoResponse`
/// implementation in `error::conversion` to produce the HTTP response.
///
/// # Usage
///
/// ```rust
/// use babel_arcana::error::AppError;
///
/// let err = AppError::auth("invalid credentials");
/// assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed validation; the message lists every violated rule
    #[error("{0}")]
    Validation(String),

    /// A uniqueness constraint was violated (duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// Credentials did not verify, or the bearer token was rejected
    #[error("{0}")]
    Auth(String),

    /// No resource matches the requested id for the requesting owner
    ///
    /// Deliberately does not distinguish "wrong id" from "someone else's
    /// resource" so the API cannot be used to probe for other users' data.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization error
    ///
    /// Raised when one of the JSON columns fails to encode or decode.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other internal failure (hashing, token signing, clock trouble)
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create an authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Conflict` - 409 Conflict
    /// - `Auth` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Database` / `Serialization` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Serialization(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message shown to clients
    ///
    /// Client-caused errors surface their full message. The 500 class
    /// collapses to a fixed string so database paths, SQL text, and library
    /// errors never leak through the API.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Serialization(_) | Self::Internal(_) => {
                "internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}
