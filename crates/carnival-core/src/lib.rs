//! # carnival-core
//!
//! Core domain logic for the carnival planner, framework-agnostic.
//!
//! This crate owns everything below the HTTP layer:
//!
//! - **Document** - the single root structure holding both collections
//! - **Store** - file-backed persistence with first-run seeding
//! - **Validation** - explicit per-entity checks with field-level errors
//!
//! ## Key Concepts
//!
//! - **Document**: `{ events: [...], mapBlocks: [...] }`, persisted as one
//!   pretty-printed JSON file
//! - **Sparse payload**: an update carrying only the fields to change;
//!   absent or null fields are preserved

pub mod ids;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use store::{CarnivalEvent, Document, MapBlock, Store, StoreError};
pub use validation::{FieldError, ValidationError};
