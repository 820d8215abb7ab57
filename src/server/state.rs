/**
 * Application State Management
 *
 * This module defines the application state shared across all handlers and
 * the `FromRef` implementations that let Axum extract pieces of it.
 *
 * # Architecture
 *
 * `AppState` is deliberately small: the SQLite pool and the configuration.
 * The pool is the single store handle for both users and sheets; it is
 * cloned cheaply (it is an `Arc` internally) into every handler that needs
 * database access. There is no other server-side state; identity travels
 * in the signed token, never in a session table.
 *
 * # State Extraction
 *
 * Handlers that only touch the database take `State<SqlitePool>`; the
 * middleware and the login handler, which also need the token secret, take
 * `State<AppState>`. The `FromRef` implementations below make both work
 * against the same router.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::server::config::Config;

/// Application state shared by every route
#[derive(Clone)]
pub struct AppState {
    /// Store handle for users and sheets
    pub db: SqlitePool,
    /// Runtime configuration (port, database URL, token secret)
    pub config: Config,
}

/// Allow handlers to extract the pool directly with `State<SqlitePool>`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allow handlers to extract the configuration with `State<Config>`
impl FromRef<AppState> for Config {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
