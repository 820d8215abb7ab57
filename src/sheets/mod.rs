//! Character Sheet Module
//!
//! Everything sheet-shaped: the model, validation, persistence and the CRUD
//! endpoints:
//!
//! ```text
//! sheets/
//! ├── types.rs      // Sheet model + create/update payloads + validation
//! ├── store.rs      // owner-scoped SQL operations
//! └── handlers.rs   // GET/POST /sheets, GET/PUT/DELETE /sheets/{id}
//! ```
//!
//! Ownership is absolute: the store never answers a query that is not scoped
//! to the authenticated owner's email.

/// CRUD endpoint handlers
pub mod handlers;
/// Owner-scoped persistence
pub mod store;
/// Sheet model and payloads
pub mod types;

// Re-export the pieces the router and tests wire together
pub use handlers::{create_sheet, delete_sheet, get_sheet, list_sheets, update_sheet};
pub use types::{CreateSheetRequest, Sheet, UpdateSheetRequest};
