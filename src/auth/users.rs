/**
 * User Model and Credential Store Operations
 *
 * This module owns the `users` table. Users are created at registration and
 * then never change: there is no update or delete path anywhere in the API.
 * The email is the unique key and doubles as the public user id.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// A registered account as stored
///
/// `password_hash` is a bcrypt hash; the plain password never reaches the
/// store. This type stays server-side only, responses use the public view in
/// `auth::handlers::types`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Email address, the unique key
    pub email: String,
    /// Display name
    pub name: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Store handle
/// * `name` - Display name
/// * `email` - Email address (unique key)
/// * `password_hash` - Already-hashed password
///
/// # Returns
/// The stored user. A duplicate email surfaces as a database error whose
/// kind is a unique violation; the registration handler maps it to 409.
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, name, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING email, name, password_hash, created_at
        "#,
    )
    .bind(email)
    .bind(name)
    .bind(password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// The user, or `None` if the email is not registered
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT email, name, password_hash, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
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

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let pool = test_pool().await;

        let created = create_user(&pool, "Aldric", "aldric@example.com", "hash")
            .await
            .unwrap();
        assert_eq!(created.email, "aldric@example.com");
        assert_eq!(created.name, "Aldric");

        let fetched = get_user_by_email(&pool, "aldric@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.email, created.email);
        assert_eq!(fetched.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_get_user_by_email_unknown() {
        let pool = test_pool().await;

        let missing = get_user_by_email(&pool, "nobody@example.com")
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let pool = test_pool().await;

        create_user(&pool, "Aldric", "aldric@example.com", "hash")
            .await
            .unwrap();
        let err = create_user(&pool, "Impostor", "aldric@example.com", "hash2")
            .await
            .unwrap_err();

        let db_err = err.as_database_error().expect("expected a database error");
        assert!(db_err.is_unique_violation());
    }
}
