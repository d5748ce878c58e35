//! Field-level validation errors.
//!
//! Every entity payload is checked by an explicit validation pass that
//! collects *all* failing fields, not just the first one. Handlers run the
//! pass before touching the store, so a rejected payload never mutates the
//! persisted document.

use serde::Serialize;

/// A single failing field with a human-readable reason.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    /// JSON field name as it appears on the wire (camelCase).
    pub field: &'static str,
    /// What was wrong with the value.
    pub message: String,
}

/// Accumulated validation failures for one payload.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failing field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Ok if nothing failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Parse an enum-valued field, recording a failure when the value is not in
/// the allowed set. Returns None exactly when an error was recorded.
pub(crate) fn parse_choice<T>(
    errors: &mut ValidationError,
    field: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
    allowed: &[&str],
) -> Option<T> {
    match parse(value) {
        Some(parsed) => Some(parsed),
        None => {
            errors.push(
                field,
                format!("unknown value {:?}, expected one of: {}", value, allowed.join(", ")),
            );
            None
        }
    }
}
