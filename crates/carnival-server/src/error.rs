//! Mapping from domain failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use carnival_core::{StoreError, ValidationError};

/// Everything a handler can fail with.
///
/// Bodies follow the `{"detail": ...}` shape the planner frontend already
/// expects: a string for not-found and storage failures, an array of
/// field errors for validation failures.
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed the explicit validation pass (422).
    Validation(ValidationError),
    /// The targeted id is absent from its collection (404).
    NotFound(&'static str),
    /// I/O or corrupt persisted data (500).
    Store(StoreError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                log::debug!("rejected payload: {}", err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": err.errors })),
                )
            }
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail })))
            }
            ApiError::Store(err) => {
                log::error!("store failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": err.to_string() })),
                )
            }
        }
        .into_response()
    }
}

// ============================================================================
// TESTS
// ============================================================================
