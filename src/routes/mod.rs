//! Routes Module
//!
//! ```text
//! routes/
//! └── router.rs   // route tree, middleware wiring, CORS, fallback
//! ```

/// Router configuration
pub mod router;

pub use router::create_router;
