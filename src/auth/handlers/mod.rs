//! Authentication HTTP Handlers
//!
//! One file per endpoint plus the shared request/response types:
//!
//! ```text
//! handlers/
//! ├── register.rs   // POST /register
//! ├── login.rs      // POST /login
//! ├── me.rs         // GET /me (protected)
//! └── types.rs      // request/response bodies
//! ```

/// Login endpoint
pub mod login;
/// Current-user endpoint
pub mod me;
/// Registration endpoint
pub mod register;
/// Request and response types
pub mod types;

// Re-export handlers for router configuration
pub use login::login;
pub use me::get_me;
pub use register::register;
pub use types::{AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, UserResponse};
