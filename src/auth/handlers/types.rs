/**
 * Authentication Handler Types
 *
 * Request and response bodies for the auth endpoints. Request string fields
 * use `#[serde(default)]` so an absent field deserializes to an empty string
 * and fails validation with a field-specific message instead of a generic
 * deserialization error.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub password_confirmation: String,
}

/// Registration response
///
/// No token is issued here; the client logs in separately.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Login request
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response: the bearer token plus the public user view
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Public view of a user, safe to return to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// The user's id; the email doubles as the identifier
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserResponse {
    /// Build the public view from a stored user, dropping the password hash
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.email.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}
