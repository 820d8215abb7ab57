/**
 * Server Initialization
 *
 * This module handles startup: opening the SQLite pool, running migrations,
 * and assembling the router with its shared state.
 *
 * # Initialization Process
 *
 * 1. Parse the database URL and open a pool, creating the database file on
 *    first start
 * 2. Run the embedded migrations from `migrations/`
 * 3. Build `AppState` and hand it to the router
 *
 * Unlike a cache or a broadcast channel, the store is not optional here:
 * if the database cannot be opened or migrated, startup fails.
 */

use std::str::FromStr;
use std::time::Duration;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Opens the database, applies migrations, and returns a router ready to
/// serve. Errors from the pool or the migrator abort startup.
///
/// # Arguments
///
/// * `config` - Runtime configuration; ownership moves into `AppState`
pub async fn create_app(config: Config) -> Result<Router, sqlx::Error> {
    tracing::info!("connecting to database at {}", config.database_url);
    let db = connect_database(&config.database_url).await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&db).await?;

    let state = AppState { db, config };
    Ok(create_router(state))
}

/// Open the SQLite pool
///
/// WAL journaling and a busy timeout let concurrent requests share the
/// database without tripping over the writer lock; `create_if_missing`
/// bootstraps a fresh database on first start.
async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}
