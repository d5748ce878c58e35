//! File-backed store for the planner document.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use super::types::{
    BlockKind, CarnivalEvent, Document, EventCategory, EventKind, EventStatus, MapBlock,
    MapPosition, Size,
};

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading or writing the data file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The data file exists but holds malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Single-owner handle to the persisted document.
///
/// The internal mutex serializes the raw file read and the raw file write
/// individually, not a whole load-mutate-save cycle. Two concurrent callers
/// can interleave between `load` and `save`, so the last writer wins; this
/// matches the behavior of the original planner backend.
pub struct Store {
    path: PathBuf,
    lock: Mutex<()>,
}

impl Store {
    /// Create a handle for the document at `path`. No I/O happens until the
    /// first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the underlying data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full document from disk.
    ///
    /// A missing file means first run: the seed document is written and
    /// returned. A file that exists but fails to parse is an error, never a
    /// re-seed.
    pub fn load(&self) -> Result<Document, StoreError> {
        if !self.path.exists() {
            let doc = seed_document();
            self.save(&doc)?;
            log::info!("seeded new data file at {}", self.path.display());
            return Ok(doc);
        }

        let contents = {
            let _guard = self.acquire();
            fs::read_to_string(&self.path)?
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Serialize the full document and overwrite the data file.
    ///
    /// Writes to a temp file and renames it into place.
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(doc)?;

        let _guard = self.acquire();
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &json)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means another thread panicked mid-I/O; the
        // guard data is (), so recover and continue.
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// The document written on first run: one constant event and one wall block.
fn seed_document() -> Document {
    Document {
        events: vec![CarnivalEvent {
            id: "1".to_string(),
            title: "Face Painting Station".to_string(),
            description:
                "Get your face painted with amazing designs! Professional artists available."
                    .to_string(),
            scheduled_time: String::new(),
            duration: 120,
            location: "Main Tent A".to_string(),
            participants: 25,
            ticket_cost: "3".to_string(),
            category: EventCategory::Activity,
            status: EventStatus::Upcoming,
            event_type: EventKind::Constant,
            map_position: Some(MapPosition { x: 20.0, y: 30.0 }),
        }],
        map_blocks: vec![MapBlock {
            id: "block-1".to_string(),
            kind: BlockKind::Wall,
            label: "North Wall".to_string(),
            position: MapPosition { x: 10.0, y: 5.0 },
            size: Size {
                width: 80.0,
                height: 3.0,
            },
        }],
    }
}

// ============================================================================
// TESTS
// ============================================================================
