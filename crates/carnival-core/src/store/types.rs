//! Persisted data types.
//!
//! The JSON shape mirrors the documents written by the original planner:
//! camelCase keys, two top-level arrays, no versioning field. Existing data
//! files must deserialize as-is.

use serde::{Deserialize, Serialize};

// ============================================================================
// Document
// ============================================================================

/// The root document holding both collections.
///
/// Insertion order is preserved and meaningful for list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub events: Vec<CarnivalEvent>,

    #[serde(default)]
    pub map_blocks: Vec<MapBlock>,
}

// ============================================================================
// Events
// ============================================================================

/// A scheduled or constant carnival event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarnivalEvent {
    /// Unique identifier, immutable after creation.
    pub id: String,

    pub title: String,

    pub description: String,

    /// Free-form time string; not validated as a timestamp.
    pub scheduled_time: String,

    /// Duration in minutes.
    pub duration: i64,

    pub location: String,

    pub participants: i64,

    /// Kept as a string on the wire ("3", "free", ...).
    pub ticket_cost: String,

    pub category: EventCategory,

    /// Defaults to upcoming on creation, caller-controlled afterward.
    pub status: EventStatus,

    #[serde(default)]
    pub event_type: EventKind,

    /// Position on the carnival map, if the event is placed.
    #[serde(default)]
    pub map_position: Option<MapPosition>,
}

/// What kind of attraction an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Game,
    Performance,
    Food,
    Activity,
    Contest,
}

impl EventCategory {
    pub const ALLOWED: &'static [&'static str] =
        &["game", "performance", "food", "activity", "contest"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "game" => Some(Self::Game),
            "performance" => Some(Self::Performance),
            "food" => Some(Self::Food),
            "activity" => Some(Self::Activity),
            "contest" => Some(Self::Contest),
            _ => None,
        }
    }
}

/// Lifecycle status, set by callers after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Active,
    Completed,
}

impl EventStatus {
    pub const ALLOWED: &'static [&'static str] = &["upcoming", "active", "completed"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(Self::Upcoming),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Whether an event runs at a scheduled time or all day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Scheduled,
    Constant,
}

impl EventKind {
    pub const ALLOWED: &'static [&'static str] = &["scheduled", "constant"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(Self::Scheduled),
            "constant" => Some(Self::Constant),
            _ => None,
        }
    }
}

// ============================================================================
// Map Blocks
// ============================================================================

/// A block on the carnival map layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBlock {
    /// Unique identifier; generated ids carry a `block-` prefix.
    pub id: String,

    #[serde(rename = "type")]
    pub kind: BlockKind,

    pub label: String,

    pub position: MapPosition,

    pub size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Wall,
    Booth,
    Stage,
    Entrance,
}

impl BlockKind {
    pub const ALLOWED: &'static [&'static str] = &["wall", "booth", "stage", "entrance"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "wall" => Some(Self::Wall),
            "booth" => Some(Self::Booth),
            "stage" => Some(Self::Stage),
            "entrance" => Some(Self::Entrance),
            _ => None,
        }
    }
}

/// A point on the map, in map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPosition {
    pub x: f64,
    pub y: f64,
}

/// Block dimensions, in map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

// ============================================================================
// TESTS
// ============================================================================
