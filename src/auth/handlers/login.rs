/**
 * Login Handler
 *
 * POST /login - checks credentials and issues a bearer token. Unknown email
 * and wrong password produce byte-identical 401 responses, so the endpoint
 * cannot be used to probe which emails are registered.
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::tokens::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::AppError;
use crate::server::state::AppState;

/// Handle user login
///
/// # Returns
/// * `200 OK` with a token and the public user view
/// * `401 Unauthorized` with the same body for any credential failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    tracing::info!("login request for {}", request.email);

    let user = get_user_by_email(&state.db, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login rejected, unknown email: {}", request.email);
            AppError::auth("invalid credentials")
        })?;

    let password_matches = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification error: {e}");
        AppError::internal("password verification failed")
    })?;

    if !password_matches {
        tracing::warn!("login rejected, wrong password for {}", request.email);
        return Err(AppError::auth("invalid credentials"));
    }

    let token = create_token(&state.config.jwt_secret, &user.email)?;

    tracing::info!("user logged in: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from_user(&user),
    }))
}
