//! # timepool-api
//!
//! HTTP API layer for TimePool built on Axum. Every operation returns the
//! uniform `{success, error, data}` envelope; admin-gated routes verify
//! HTTP Basic credentials against the admin identity gate on each request.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
