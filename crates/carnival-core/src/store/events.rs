//! Event payloads and collection operations.

use serde::Deserialize;

use super::types::{CarnivalEvent, Document, EventCategory, EventKind, EventStatus, MapPosition};
use crate::validation::{parse_choice, ValidationError};

/// Creation payload: every event field except `id` and `status`.
///
/// Enum-valued fields arrive as raw strings and go through an explicit
/// validation pass so one response can report every bad field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreate {
    pub title: String,
    pub description: String,
    pub scheduled_time: String,
    pub duration: i64,
    pub location: String,
    pub participants: i64,
    pub ticket_cost: String,
    pub category: String,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub map_position: Option<MapPosition>,
}

impl EventCreate {
    /// Validate the payload and build the event under the given id.
    ///
    /// New events always start as upcoming; the status is caller-controlled
    /// only through later updates.
    pub fn into_event(self, id: String) -> Result<CarnivalEvent, ValidationError> {
        let mut errors = ValidationError::new();

        let category = parse_choice(
            &mut errors,
            "category",
            &self.category,
            EventCategory::parse,
            EventCategory::ALLOWED,
        );
        let event_type = match self.event_type.as_deref() {
            Some(value) => parse_choice(
                &mut errors,
                "eventType",
                value,
                EventKind::parse,
                EventKind::ALLOWED,
            ),
            None => Some(EventKind::default()),
        };

        match (category, event_type) {
            (Some(category), Some(event_type)) => Ok(CarnivalEvent {
                id,
                title: self.title,
                description: self.description,
                scheduled_time: self.scheduled_time,
                duration: self.duration,
                location: self.location,
                participants: self.participants,
                ticket_cost: self.ticket_cost,
                category,
                status: EventStatus::Upcoming,
                event_type,
                map_position: self.map_position,
            }),
            _ => Err(errors),
        }
    }
}

/// Sparse update payload: only supplied fields change.
///
/// A field that is absent or explicitly null leaves the stored value
/// untouched. The id is never updatable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub participants: Option<i64>,
    #[serde(default)]
    pub ticket_cost: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub map_position: Option<MapPosition>,
}

impl EventUpdate {
    /// Merge the supplied fields into an existing event.
    ///
    /// All enum fields are validated before anything is written, so a
    /// rejected payload leaves the event exactly as it was.
    pub fn apply_to(&self, event: &mut CarnivalEvent) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        let category = self.category.as_deref().map(|value| {
            parse_choice(
                &mut errors,
                "category",
                value,
                EventCategory::parse,
                EventCategory::ALLOWED,
            )
        });
        let status = self.status.as_deref().map(|value| {
            parse_choice(
                &mut errors,
                "status",
                value,
                EventStatus::parse,
                EventStatus::ALLOWED,
            )
        });
        let event_type = self.event_type.as_deref().map(|value| {
            parse_choice(
                &mut errors,
                "eventType",
                value,
                EventKind::parse,
                EventKind::ALLOWED,
            )
        });

        errors.into_result()?;

        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(scheduled_time) = &self.scheduled_time {
            event.scheduled_time = scheduled_time.clone();
        }
        if let Some(duration) = self.duration {
            event.duration = duration;
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
        if let Some(participants) = self.participants {
            event.participants = participants;
        }
        if let Some(ticket_cost) = &self.ticket_cost {
            event.ticket_cost = ticket_cost.clone();
        }
        if let Some(Some(category)) = category {
            event.category = category;
        }
        if let Some(Some(status)) = status {
            event.status = status;
        }
        if let Some(Some(event_type)) = event_type {
            event.event_type = event_type;
        }
        if let Some(map_position) = self.map_position {
            event.map_position = Some(map_position);
        }

        Ok(())
    }
}

/// Find an event by id.
pub fn find_event_mut<'a>(doc: &'a mut Document, id: &str) -> Option<&'a mut CarnivalEvent> {
    doc.events.iter_mut().find(|e| e.id == id)
}

/// Remove an event by id. Returns false when no event matched, in which
/// case the document is unchanged.
pub fn remove_event(doc: &mut Document, id: &str) -> bool {
    let before = doc.events.len();
    doc.events.retain(|e| e.id != id);
    doc.events.len() != before
}

// ============================================================================
// TESTS
// ============================================================================
