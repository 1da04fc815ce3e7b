//! Todo application HTTP server.
//!
//! Wires the in-memory store, service, and router together and serves the
//! REST API until Ctrl-C or SIGTERM.

use std::sync::Arc;
use todo_core::SystemClock;
use todo_server::config::Config;
use todo_server::store::InMemoryTodoStore;
use todo_server::{AppState, TodoService, build_router};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading configuration
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting todo server");

    // Build store and service; the store owns the collection and everything
    // else reaches it through the service.
    let clock = Arc::new(SystemClock);
    let store = Arc::new(InMemoryTodoStore::new(clock.clone()));
    let service = Arc::new(TodoService::new(store, clock));
    let state = AppState::new(service);

    // Build router
    let app = build_router(state);

    // Create TCP listener
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for:
/// - Ctrl+C (SIGINT)
/// - SIGTERM (in production environments)
#[allow(clippy::expect_used)] // Failing to install signal handlers is unrecoverable
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
