/**
 * Authentication Middleware
 *
 * Guards the protected routes. Every request passing through here must carry
 * `Authorization: Bearer <token>`; the token is verified and the identity it
 * names is attached to the request for handlers to extract.
 *
 * The store is deliberately not consulted: a token proves identity on its
 * own until it expires, so deleting an account does not revoke tokens
 * already issued for it.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::auth::tokens::verify_token;
use crate::error::AppError;
use crate::server::state::AppState;

/// Authenticated identity established for a request
///
/// The email comes from the token's subject claim and is the scoping key for
/// every sheet query.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Verify the bearer token and attach the identity to the request
///
/// # Errors
/// `401 Unauthorized` when the header is missing, is not a bearer header, or
/// the token fails signature or expiry checks.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("request without authorization header");
            AppError::auth("missing authorization header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("authorization header is not a bearer token");
        AppError::auth("authorization header must be a bearer token")
    })?;

    let claims = verify_token(&state.config.jwt_secret, token)?;

    request.extensions_mut().insert(AuthenticatedUser {
        email: claims.sub,
    });

    Ok(next.run(request).await)
}

/// Extractor handing the authenticated identity to handlers
///
/// Only meaningful behind [`auth_middleware`]; elsewhere the extension is
/// absent and extraction rejects with 401.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("authenticated user missing from request extensions");
                AppError::auth("authentication required")
            })
    }
}
