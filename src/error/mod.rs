//! Application Error Module
//!
//! This module defines the error taxonomy used across the whole service.
//! Every handler and store function reports failures through [`AppError`],
//! which carries enough information to render the HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Classes
//!
//! - `Validation` - malformed or missing input (400)
//! - `Conflict` - duplicate email on registration (409)
//! - `Auth` - bad credentials or a bad/expired token (401)
//! - `NotFound` - no matching owned resource (404)
//! - `Database` / `Serialization` / `Internal` - unclassified internal
//!   failures (500); their causes are logged but never leaked to clients
//!
//! # HTTP Response Conversion
//!
//! `AppError` implements `IntoResponse`, so handlers return
//! `Result<_, AppError>` and let the conversion layer map each class to a
//! status code and a JSON body of the form `{"error": ..., "status": ...}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AppError;
