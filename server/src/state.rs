//! Application state for the HTTP server.

use crate::service::TodoService;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via `Arc`) for each request. The service, and through it
/// the store, is injected here rather than held as module-level state.
#[derive(Clone)]
pub struct AppState {
    /// Todo service backing every `/api/todo` endpoint
    pub service: Arc<TodoService>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(service: Arc<TodoService>) -> Self {
        Self { service }
    }
}
