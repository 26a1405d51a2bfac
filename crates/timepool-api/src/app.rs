//! Application builder — wires state, router, and middleware into a served
//! Axum app.

use axum::Router;
use sqlx::PgPool;
use tracing::info;

use timepool_core::config::AppConfig;
use timepool_core::error::{AppError, ErrorKind};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the TimePool server with the given configuration and database pool.
///
/// Blocks until a shutdown signal (Ctrl-C or SIGTERM) is received, then
/// finishes in-flight requests before returning.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace_seconds = config.server.shutdown_grace_seconds;

    let state = AppState::new(config, db_pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Failed to bind {addr}: {e}"),
            e,
        )
    })?;

    info!(%addr, "TimePool server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(grace_seconds))
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Server error: {e}"), e)
        })
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal(grace_seconds: u64) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!(grace_seconds, "Shutdown signal received, draining connections");
}
