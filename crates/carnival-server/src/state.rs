//! Shared state for the HTTP server.

use std::sync::Arc;

use carnival_core::Store;

/// State available to all HTTP handlers.
pub struct AppState {
    /// The single-owner handle to the persisted document.
    pub store: Store,
}

/// Handlers receive the state behind an `Arc`.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Wrap a store handle for sharing across handlers.
    pub fn shared(store: Store) -> SharedState {
        Arc::new(Self { store })
    }
}
