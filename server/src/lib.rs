//! JSON-over-HTTP todo service backed by SQLite.
//!
//! # Design
//! - `Database` is opened once and handed to the router as axum state; every
//!   handler reaches storage through it, never through a global.
//! - Handlers live in [`routes`]; they return `Result<_, ApiError>` and
//!   [`error::ApiError`] owns the mapping to status codes and error bodies.
//! - Each write is one auto-committed statement, so there is no cross-request
//!   locking beyond SQLite's own. Concurrent updates are last-writer-wins.

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod routes;

use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use db::{Database, DbError};
pub use error::{ApiError, ErrorBody};
pub use model::{CreateTodo, MessageResponse, Todo, UpdateTodo};

/// Build the router with permissive CORS.
pub fn app(db: Database) -> Router {
    router(db, true)
}

/// Build the router, optionally allowing cross-origin requests from anywhere.
pub fn router(db: Database, cors: bool) -> Router {
    let mut router = Router::new()
        .route(
            "/api/todos",
            get(routes::list_todos).post(routes::create_todo),
        )
        .route(
            "/api/todos/{id}",
            put(routes::update_todo).delete(routes::delete_todo),
        )
        .method_not_allowed_fallback(routes::method_not_allowed)
        .fallback(routes::fallback)
        .with_state(db)
        .layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(CorsLayer::permissive());
    }
    router
}

/// Serve the todo API on `listener` until the process is asked to stop.
pub async fn run(listener: TcpListener, db: Database, cors: bool) -> Result<(), std::io::Error> {
    axum::serve(listener, router(db.clone(), cors))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    db.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
