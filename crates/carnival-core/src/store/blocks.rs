//! Map block payloads and collection operations.

use serde::Deserialize;

use super::types::{BlockKind, Document, MapBlock, MapPosition, Size};
use crate::validation::{parse_choice, ValidationError};

/// Creation payload: every block field except `id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockCreate {
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub position: MapPosition,
    pub size: Size,
}

impl BlockCreate {
    /// Validate the payload and build the block under the given id.
    pub fn into_block(self, id: String) -> Result<MapBlock, ValidationError> {
        let mut errors = ValidationError::new();

        let kind = parse_choice(
            &mut errors,
            "type",
            &self.kind,
            BlockKind::parse,
            BlockKind::ALLOWED,
        );

        match kind {
            Some(kind) => Ok(MapBlock {
                id,
                kind,
                label: self.label,
                position: self.position,
                size: self.size,
            }),
            None => Err(errors),
        }
    }
}

/// Sparse update payload; absent or null fields are preserved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockUpdate {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub position: Option<MapPosition>,
    #[serde(default)]
    pub size: Option<Size>,
}

impl BlockUpdate {
    /// Merge the supplied fields into an existing block.
    ///
    /// The kind is validated before anything is written.
    pub fn apply_to(&self, block: &mut MapBlock) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        let kind = self.kind.as_deref().map(|value| {
            parse_choice(&mut errors, "type", value, BlockKind::parse, BlockKind::ALLOWED)
        });

        errors.into_result()?;

        if let Some(Some(kind)) = kind {
            block.kind = kind;
        }
        if let Some(label) = &self.label {
            block.label = label.clone();
        }
        if let Some(position) = self.position {
            block.position = position;
        }
        if let Some(size) = self.size {
            block.size = size;
        }

        Ok(())
    }
}

/// Find a block by id.
pub fn find_block_mut<'a>(doc: &'a mut Document, id: &str) -> Option<&'a mut MapBlock> {
    doc.map_blocks.iter_mut().find(|b| b.id == id)
}

/// Remove a block by id. Returns false when no block matched, in which case
/// the document is unchanged.
pub fn remove_block(doc: &mut Document, id: &str) -> bool {
    let before = doc.map_blocks.len();
    doc.map_blocks.retain(|b| b.id != id);
    doc.map_blocks.len() != before
}

// ============================================================================
// TESTS
// ============================================================================
