//! Persistence layer for the planner document.
//!
//! # Overview
//!
//! All planner state lives in one JSON file:
//!
//! ```text
//! data.json
//! ├── events        # Scheduled and constant carnival events
//! └── mapBlocks     # Map layout blocks (walls, booths, stages, entrances)
//! ```
//!
//! The whole document is the unit of persistence: every request re-reads it
//! from disk, mutates its in-memory copy, and writes the whole thing back.
//! There is no in-memory cache between requests.
//!
//! # Design Principles
//!
//! ## Atomic Writes
//!
//! Saves use write-then-rename to prevent corruption:
//!
//! 1. Write to `data.json.tmp`
//! 2. Rename to `data.json` (atomic on Unix)
//!
//! ## Seeding
//!
//! The first load against a missing file writes a seed document with one
//! example event and one example block. A file that later becomes empty
//! through deletions is never re-seeded.

mod file;
mod types;

pub mod blocks;
pub mod events;

pub use file::{Store, StoreError};
pub use types::{
    BlockKind, CarnivalEvent, Document, EventCategory, EventKind, EventStatus, MapBlock,
    MapPosition, Size,
};
