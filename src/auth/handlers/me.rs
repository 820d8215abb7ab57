/**
 * Current User Handler
 *
 * GET /me - resolves the authenticated identity back to a stored account.
 * The token alone proves identity; this endpoint exists so clients can
 * recover the display name without keeping their own copy.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_email;
use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// Return the authenticated user's public view
///
/// # Returns
/// * `200 OK` with id, name and email
/// * `404 Not Found` when the account behind a still-valid token is gone
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let record = get_user_by_email(&pool, &user.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("authenticated user missing from store: {}", user.email);
            AppError::NotFound("user")
        })?;

    Ok(Json(UserResponse::from_user(&record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::create_user;
    use crate::middleware::auth::AuthenticatedUser;
    use axum::http::StatusCode;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!().run(&pool).await.unwrap();
        pool
    }

    fn auth_user(email: &str) -> AuthUser {
        AuthUser(AuthenticatedUser {
            email: email.to_string(),
        })
    }

    #[tokio::test]
    async fn test_get_me_returns_public_view() {
        let pool = test_pool().await;
        create_user(&pool, "Aldric", "aldric@example.com", "hash")
            .await
            .unwrap();

        let response = get_me(State(pool), auth_user("aldric@example.com"))
            .await
            .unwrap();

        assert_eq!(response.id, "aldric@example.com");
        assert_eq!(response.name, "Aldric");
        assert_eq!(response.email, "aldric@example.com");
    }

    #[tokio::test]
    async fn test_get_me_unknown_account() {
        let pool = test_pool().await;

        let err = get_me(State(pool), auth_user("ghost@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
