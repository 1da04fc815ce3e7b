//! Router configuration for the todo server.
//!
//! Builds the complete Axum router with all endpoints and middleware layers.

use crate::api::todos;
use crate::state::AppState;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, patch},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the complete Axum router.
///
/// Configures the health check, the `/api/todo` CRUD surface, per-request
/// trace spans, and CORS (the browser client is served from a different
/// origin).
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
///
/// # Returns
///
/// Configured Axum router ready to serve requests.
pub fn build_router(state: AppState) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/todo", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todo/:id",
            get(todos::get_todo)
                .patch(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/todo/:id/completed", patch(todos::toggle_completed));

    Router::new()
        // Health check (no state)
        .route("/health", get(health_check))
        // API routes under /api prefix
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Simple health check endpoint (for basic liveness).
///
/// Returns 200 OK to indicate the service is running.
#[allow(clippy::unused_async)]
async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_check_is_ok() {
        let (status, body) = health_check().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
