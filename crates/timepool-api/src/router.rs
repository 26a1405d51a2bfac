//! Route definitions for the TimePool HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(session_routes())
        .merge(prediction_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Admin auth endpoints: login and bootstrap.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/admins", post(handlers::auth::create_admin))
}

/// User registration and lookup.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(handlers::user::register).get(handlers::user::list),
        )
        .route("/users/lookup", get(handlers::user::lookup))
        .route("/users/{id}", get(handlers::user::get))
}

/// Session lifecycle, per-session predictions, and winner resolution.
fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions",
            post(handlers::session::create).get(handlers::session::list),
        )
        .route("/sessions/{id}", get(handlers::session::get))
        .route("/sessions/{id}/times", put(handlers::session::update_times))
        .route("/sessions/{id}/close", post(handlers::session::close))
        .route("/sessions/{id}/open", post(handlers::session::open))
        .route(
            "/sessions/{id}/predictions",
            get(handlers::prediction::list_by_session),
        )
        .route(
            "/sessions/{id}/differences",
            post(handlers::winner::recompute_differences),
        )
        .route("/sessions/{id}/winner", get(handlers::winner::winner))
}

/// Prediction submission and global listing.
fn prediction_routes() -> Router<AppState> {
    Router::new().route(
        "/predictions",
        post(handlers::prediction::create).get(handlers::prediction::list_all),
    )
}

/// Liveness probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
