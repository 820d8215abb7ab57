/**
 * Server Configuration
 *
 * This module collects the server's runtime configuration from environment
 * variables, with development defaults for every value so a bare
 * `cargo run` works out of the box.
 *
 * # Configuration Sources
 *
 * - `SERVER_PORT` - TCP port to listen on (default 3002)
 * - `DATABASE_URL` - SQLite database location
 *   (default `sqlite://babel_arcana.db`, created on first start)
 * - `JWT_SECRET` - HS256 signing secret for access tokens; falls back to a
 *   built-in development value with a logged warning
 *
 * A `.env` file is honored because `main` calls `dotenv` before building the
 * configuration.
 */

/// Default listen port
pub const DEFAULT_PORT: u16 = 3002;

/// Default on-disk database next to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://babel_arcana.db";

const DEFAULT_JWT_SECRET: &str = "arcana-dev-secret-change-in-production";

/// Runtime configuration shared through `AppState`
///
/// Built once at startup and injected everywhere it is needed; nothing in
/// the request path reads the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the server binds to
    pub port: u16,
    /// SQLite connection URL
    pub database_url: String,
    /// Secret used to sign and verify access tokens
    pub jwt_secret: String,
}

impl Config {
    /// Build the configuration from environment variables
    ///
    /// Missing or unparseable values fall back to defaults. A missing
    /// `JWT_SECRET` is tolerated but logged loudly, since tokens signed with
    /// the development secret are forgeable by anyone who reads the source.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "JWT_SECRET not set, using the built-in development secret"
                );
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        Self {
            port,
            database_url,
            jwt_secret,
        }
    }
}
