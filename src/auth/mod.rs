//! Authentication Module
//!
//! Account storage, credential checking and bearer-token management:
//!
//! ```text
//! auth/
//! ├── users.rs      // user model + credential store operations
//! ├── tokens.rs     // JWT signing and verification
//! └── handlers/     // register, login, me endpoints
//! ```
//!
//! Passwords are stored as bcrypt hashes. Identity travels as a signed JWT
//! whose subject is the user's email; no session state is kept server-side.

/// HTTP handlers for the auth endpoints
pub mod handlers;
/// Token signing and verification
pub mod tokens;
/// User model and store operations
pub mod users;

// Re-export the pieces the rest of the crate wires together
pub use handlers::{get_me, login, register};
pub use tokens::{create_token, verify_token, Claims};
pub use users::User;
