/**
 * Registration Handler
 *
 * POST /register - creates an account from name, email, password and a
 * confirmation. Validation collects every violated rule into one message so
 * the client can surface all problems at once. A duplicate email answers
 * 409, both from the up-front lookup and from the unique constraint when two
 * registrations race.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::AppError;

/// Minimum accepted password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 4;

/// Handle user registration
///
/// # Returns
/// * `201 Created` with a confirmation message
/// * `400 Bad Request` listing every validation failure
/// * `409 Conflict` when the email is already registered
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    tracing::info!("registration request for {}", request.email);

    validate(&request)?;

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("registration rejected, email taken: {}", request.email);
        return Err(AppError::conflict("email already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {e}");
        AppError::internal("password hashing failed")
    })?;

    let user = create_user(&pool, &request.name, &request.email, &password_hash)
        .await
        .map_err(|e| {
            // Two racing registrations can both pass the lookup above; the
            // unique key on email settles it and the loser gets the same 409.
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                tracing::warn!("registration lost insert race: {}", request.email);
                AppError::conflict("email already registered")
            } else {
                AppError::from(e)
            }
        })?;

    tracing::info!("user registered: {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "user registered successfully".to_string(),
        }),
    ))
}

/// Check the whole payload and report every violation at once
fn validate(request: &RegisterRequest) -> Result<(), AppError> {
    let mut violations = Vec::new();

    if request.name.is_empty() {
        violations.push("name is required".to_string());
    }
    if !is_valid_email(&request.email) {
        violations.push("email is invalid".to_string());
    }
    // Character count, not byte length: a three-character password stays
    // three characters even when every character is multibyte.
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        violations.push(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if request.password != request.password_confirmation {
        violations.push("passwords do not match".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "invalid registration data: {}",
            violations.join(", ")
        )))
    }
}

/// Structural email check
///
/// Not a full RFC 5322 parser: one `@` with a non-empty local part and a
/// dotted domain, no whitespace. Enough to catch the typos this API sees.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            name: "Aldric".to_string(),
            email: "aldric@example.com".to_string(),
            password: "mysterium".to_string(),
            password_confirmation: "mysterium".to_string(),
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("gm@example.com"));
        assert!(is_valid_email("first.last@sub.example.com"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("gm@"));
        assert!(!is_valid_email("gm@nodot"));
        assert!(!is_valid_email("gm@.example.com"));
        assert!(!is_valid_email("gm@example.com."));
        assert!(!is_valid_email("two@at@example.com"));
        assert!(!is_valid_email("spaced name@example.com"));
    }

    #[tokio::test]
    async fn test_register_success() {
        let pool = test_pool().await;

        let (status, body) = register(State(pool.clone()), Json(valid_request()))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message, "user registered successfully");

        let stored = get_user_by_email(&pool, "aldric@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Aldric");
        assert!(bcrypt::verify("mysterium", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let pool = test_pool().await;

        register(State(pool.clone()), Json(valid_request()))
            .await
            .unwrap();
        let err = register(State(pool.clone()), Json(valid_request()))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let pool = test_pool().await;

        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        let err = register(State(pool), Json(request)).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("email is invalid"));
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let pool = test_pool().await;

        let mut request = valid_request();
        request.password = "abc".to_string();
        request.password_confirmation = "abc".to_string();
        let err = register(State(pool), Json(request)).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err
            .to_string()
            .contains("password must be at least 4 characters"));
    }

    #[tokio::test]
    async fn test_register_counts_password_characters_not_bytes() {
        let pool = test_pool().await;

        // Three characters, six bytes: still too short.
        let mut request = valid_request();
        request.password = "äää".to_string();
        request.password_confirmation = "äää".to_string();
        let err = register(State(pool.clone()), Json(request))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err
            .to_string()
            .contains("password must be at least 4 characters"));

        // Four multibyte characters clear the minimum.
        let mut request = valid_request();
        request.password = "ääää".to_string();
        request.password_confirmation = "ääää".to_string();
        let (status, _) = register(State(pool), Json(request)).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_register_password_mismatch() {
        let pool = test_pool().await;

        let mut request = valid_request();
        request.password_confirmation = "different".to_string();
        let err = register(State(pool), Json(request)).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("passwords do not match"));
    }

    #[tokio::test]
    async fn test_register_reports_every_violation() {
        let pool = test_pool().await;

        let request = RegisterRequest {
            name: String::new(),
            email: String::new(),
            password: "ab".to_string(),
            password_confirmation: "cd".to_string(),
        };
        let err = register(State(pool), Json(request)).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("name is required"));
        assert!(message.contains("email is invalid"));
        assert!(message.contains("password must be at least 4 characters"));
        assert!(message.contains("passwords do not match"));
    }
}
