//! Middleware Module
//!
//! Request-level guards applied by the router:
//!
//! ```text
//! middleware/
//! └── auth.rs   // bearer-token verification + AuthUser extractor
//! ```

/// Bearer-token authentication
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
