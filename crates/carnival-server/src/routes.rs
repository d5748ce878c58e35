//! HTTP route handlers for the planner API.
//!
//! Every mutating handler follows the same shape: load the full document,
//! locate and validate, apply, save the full document, return the result.
//! Nothing is cached between requests; the data file is the only state.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use carnival_core::ids;
use carnival_core::store::blocks::{self, BlockCreate, BlockUpdate};
use carnival_core::store::events::{self, EventCreate, EventUpdate};
use carnival_core::{CarnivalEvent, Document, MapBlock};

use crate::error::ApiError;
use crate::state::SharedState;

/// Build the router with all API routes and a permissive CORS layer.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/store", get(get_store).put(replace_store))
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", patch(update_event).delete(delete_event))
        .route("/map-blocks", get(list_blocks).post(create_block))
        .route("/map-blocks/{id}", patch(update_block).delete(delete_block))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

// ============================================================================
// STORE
// ============================================================================

async fn get_store(State(state): State<SharedState>) -> Result<Json<Document>, ApiError> {
    Ok(Json(state.store.load()?))
}

/// Replace the whole document unconditionally.
///
/// This bypasses per-entity validation: anything that satisfies the
/// document's field types is committed, duplicate ids included.
async fn replace_store(
    State(state): State<SharedState>,
    Json(doc): Json<Document>,
) -> Result<Json<Document>, ApiError> {
    state.store.save(&doc)?;
    Ok(Json(doc))
}

// ============================================================================
// EVENTS
// ============================================================================

async fn list_events(State(state): State<SharedState>) -> Result<Json<Vec<CarnivalEvent>>, ApiError> {
    Ok(Json(state.store.load()?.events))
}

async fn create_event(
    State(state): State<SharedState>,
    Json(payload): Json<EventCreate>,
) -> Result<Json<CarnivalEvent>, ApiError> {
    let mut doc = state.store.load()?;
    let event = payload.into_event(ids::new_event_id())?;
    log::debug!("creating event {}", event.id);
    doc.events.push(event.clone());
    state.store.save(&doc)?;
    Ok(Json(event))
}

async fn update_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<EventUpdate>,
) -> Result<Json<CarnivalEvent>, ApiError> {
    let mut doc = state.store.load()?;
    let event = events::find_event_mut(&mut doc, &id).ok_or(ApiError::NotFound("Event not found"))?;
    payload.apply_to(event)?;
    let updated = event.clone();
    state.store.save(&doc)?;
    Ok(Json(updated))
}

async fn delete_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut doc = state.store.load()?;
    if !events::remove_event(&mut doc, &id) {
        return Err(ApiError::NotFound("Event not found"));
    }
    state.store.save(&doc)?;
    Ok(Json(json!({ "ok": true })))
}

// ============================================================================
// MAP BLOCKS
// ============================================================================

async fn list_blocks(State(state): State<SharedState>) -> Result<Json<Vec<MapBlock>>, ApiError> {
    Ok(Json(state.store.load()?.map_blocks))
}

async fn create_block(
    State(state): State<SharedState>,
    Json(payload): Json<BlockCreate>,
) -> Result<Json<MapBlock>, ApiError> {
    let mut doc = state.store.load()?;
    let block = payload.into_block(ids::new_block_id())?;
    log::debug!("creating block {}", block.id);
    doc.map_blocks.push(block.clone());
    state.store.save(&doc)?;
    Ok(Json(block))
}

async fn update_block(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<BlockUpdate>,
) -> Result<Json<MapBlock>, ApiError> {
    let mut doc = state.store.load()?;
    let block = blocks::find_block_mut(&mut doc, &id).ok_or(ApiError::NotFound("Block not found"))?;
    payload.apply_to(block)?;
    let updated = block.clone();
    state.store.save(&doc)?;
    Ok(Json(updated))
}

async fn delete_block(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let mut doc = state.store.load()?;
    if !blocks::remove_block(&mut doc, &id) {
        return Err(ApiError::NotFound("Block not found"));
    }
    state.store.save(&doc)?;
    Ok(Json(json!({ "ok": true })))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use carnival_core::Store;
    use tempfile::{tempdir, TempDir};
    use tower::ServiceExt;

    fn test_app() -> (TempDir, Router) {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("data.json"));
        let app = router(AppState::shared(store));
        (dir, app)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(value) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn event_payload() -> Value {
        json!({
            "title": "Ring Toss",
            "description": "Classic ring toss",
            "scheduledTime": "14:00",
            "duration": 60,
            "location": "Midway",
            "participants": 10,
            "ticketCost": "2",
            "category": "game"
        })
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (_dir, app) = test_app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn first_store_read_returns_seed() {
        let (_dir, app) = test_app();
        let (status, body) = send(&app, Method::GET, "/store", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["events"].as_array().unwrap().len(), 1);
        assert_eq!(body["events"][0]["id"], "1");
        assert_eq!(body["events"][0]["eventType"], "constant");
        assert_eq!(body["mapBlocks"].as_array().unwrap().len(), 1);
        assert_eq!(body["mapBlocks"][0]["id"], "block-1");
        assert_eq!(body["mapBlocks"][0]["type"], "wall");
    }

    #[tokio::test]
    async fn replace_store_commits_payload_verbatim() {
        let (_dir, app) = test_app();

        // Duplicate ids are deliberately accepted here.
        let doc = json!({
            "events": [],
            "mapBlocks": [
                {"id": "block-x", "type": "booth", "label": "A",
                 "position": {"x": 0.0, "y": 0.0}, "size": {"width": 1.0, "height": 1.0}},
                {"id": "block-x", "type": "booth", "label": "B",
                 "position": {"x": 0.0, "y": 0.0}, "size": {"width": 1.0, "height": 1.0}}
            ]
        });
        let (status, body) = send(&app, Method::PUT, "/store", Some(doc.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mapBlocks"].as_array().unwrap().len(), 2);

        let (_, stored) = send(&app, Method::GET, "/store", None).await;
        assert_eq!(stored["events"].as_array().unwrap().len(), 0);
        assert_eq!(stored["mapBlocks"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_event_generates_id_and_status() {
        let (_dir, app) = test_app();
        let (status, body) = send(&app, Method::POST, "/events", Some(event_payload())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "upcoming");
        assert_eq!(body["eventType"], "scheduled");
        let id = body["id"].as_str().unwrap();
        assert_ne!(id, "1");
        assert_eq!(id.len(), 12);

        let (_, listed) = send(&app, Method::GET, "/events", None).await;
        let ids: Vec<_> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap().to_string())
            .collect();
        assert!(ids.contains(&id.to_string()));
    }

    #[tokio::test]
    async fn create_event_rejects_bad_category() {
        let (_dir, app) = test_app();
        let (_, before) = send(&app, Method::GET, "/events", None).await;

        let mut payload = event_payload();
        payload["category"] = json!("invalid");
        let (status, body) = send(&app, Method::POST, "/events", Some(payload)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["field"], "category");

        let (_, after) = send(&app, Method::GET, "/events", None).await;
        assert_eq!(
            before.as_array().unwrap().len(),
            after.as_array().unwrap().len()
        );
    }

    #[tokio::test]
    async fn patch_event_preserves_untouched_fields() {
        let (_dir, app) = test_app();
        let (_, created) = send(&app, Method::POST, "/events", Some(event_payload())).await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/events/{}", id),
            Some(json!({ "duration": 90 })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["duration"], 90);
        assert_eq!(body["title"], "Ring Toss");
        assert_eq!(body["location"], "Midway");
        assert_eq!(body["status"], "upcoming");
    }

    #[tokio::test]
    async fn patch_event_missing_id_is_404() {
        let (_dir, app) = test_app();
        let (status, body) = send(
            &app,
            Method::PATCH,
            "/events/nope",
            Some(json!({ "duration": 90 })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Event not found");
    }

    #[tokio::test]
    async fn delete_event_missing_id_never_mutates() {
        let (_dir, app) = test_app();
        let (_, before) = send(&app, Method::GET, "/events", None).await;

        for _ in 0..2 {
            let (status, body) = send(&app, Method::DELETE, "/events/nope", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["detail"], "Event not found");
        }

        let (_, after) = send(&app, Method::GET, "/events", None).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn delete_event_removes_it() {
        let (_dir, app) = test_app();
        let (status, body) = send(&app, Method::DELETE, "/events/1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));

        let (_, listed) = send(&app, Method::GET, "/events", None).await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn block_lifecycle_end_to_end() {
        let (_dir, app) = test_app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/map-blocks",
            Some(json!({
                "type": "stage",
                "label": "Main Stage",
                "position": {"x": 50, "y": 50},
                "size": {"width": 20, "height": 10}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("block-"));
        assert_ne!(id, "block-1");

        let (_, listed) = send(&app, Method::GET, "/map-blocks", None).await;
        assert!(listed
            .as_array()
            .unwrap()
            .iter()
            .any(|b| b["id"] == id.as_str()));

        let (status, body) =
            send(&app, Method::DELETE, &format!("/map-blocks/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));

        let (_, listed) = send(&app, Method::GET, "/map-blocks", None).await;
        assert!(!listed
            .as_array()
            .unwrap()
            .iter()
            .any(|b| b["id"] == id.as_str()));
    }

    #[tokio::test]
    async fn patch_block_updates_supplied_fields() {
        let (_dir, app) = test_app();
        let (status, body) = send(
            &app,
            Method::PATCH,
            "/map-blocks/block-1",
            Some(json!({ "label": "South Wall" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["label"], "South Wall");
        assert_eq!(body["type"], "wall");
        assert_eq!(body["position"], json!({"x": 10.0, "y": 5.0}));
    }

    #[tokio::test]
    async fn patch_block_missing_id_is_404() {
        let (_dir, app) = test_app();
        let (status, body) = send(
            &app,
            Method::PATCH,
            "/map-blocks/nope",
            Some(json!({ "label": "x" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Block not found");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let (_dir, app) = test_app();
        let request = Request::builder()
            .method(Method::GET)
            .uri("/health")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }
}
