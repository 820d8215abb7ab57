//! Babel Arcana - Character Sheet Backend
//!
//! Babel Arcana is a REST backend for tabletop RPG character sheets. Players
//! register an account, log in to receive a bearer token, and manage their
//! own sheets; nobody can see or touch anybody else's records.
//!
//! # Overview
//!
//! The API surface is small and deliberate:
//!
//! - Account registration and login with bcrypt-hashed passwords
//! - Stateless authentication via HS256-signed JWTs, valid for one hour
//! - Owner-scoped CRUD over character sheets backed by SQLite
//!
//! # Module Structure
//!
//! - **`auth`** - accounts and tokens
//!   - User model and credential store
//!   - JWT signing and verification
//!   - Register, login and current-user handlers
//!
//! - **`sheets`** - character sheets
//!   - Sheet model, validation and defaults
//!   - Owner-scoped persistence
//!   - CRUD handlers
//!
//! - **`middleware`** - bearer-token guard and the `AuthUser` extractor
//!
//! - **`routes`** - route tree, CORS and the JSON 404 fallback
//!
//! - **`server`** - configuration, shared state and startup
//!
//! - **`error`** - the `AppError` taxonomy and its JSON rendering
//!
//! # Usage
//!
//! ```rust,no_run
//! use babel_arcana::server::{create_app, Config};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = Config::from_env();
//! let app = create_app(config).await?;
//! // hand `app` to axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every fallible path returns `Result<T, AppError>`; the error renders as
//! `{"error": "...", "status": ...}` with the matching HTTP status, and
//! internal details never leak into a response body.

/// Accounts, credentials and tokens
pub mod auth;

/// Error taxonomy and JSON rendering
pub mod error;

/// Request guards
pub mod middleware;

/// Route tree configuration
pub mod routes;

/// Configuration, state and startup
pub mod server;

/// Character sheet model, store and handlers
pub mod sheets;

// Re-export the types most callers need
pub use error::AppError;
pub use server::{create_app, AppState, Config};
