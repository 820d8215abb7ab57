//! Server Module
//!
//! This module handles everything that happens before the first request:
//! reading configuration, opening the SQLite pool, running migrations, and
//! assembling the router with its shared state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Environment-backed configuration
//! ├── state.rs  - Shared application state
//! └── init.rs   - Pool setup, migrations, app assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. `Config::from_env` collects port, database URL, and JWT secret
//! 2. `create_app` opens the pool, runs migrations, and builds the router
//! 3. `main` binds the listener and serves until shutdown

/// Environment-backed configuration
pub mod config;

/// Pool setup, migrations, and app assembly
pub mod init;

/// Shared application state
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use init::create_app;
pub use state::AppState;
