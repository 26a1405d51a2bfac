//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use timepool_auth::gate::AdminGate;
use timepool_auth::password::{PasswordHasher, PasswordPolicy};
use timepool_core::config::AppConfig;
use timepool_database::repositories::admin::AdminCredentialRepository;
use timepool_database::repositories::prediction::PredictionRepository;
use timepool_database::repositories::session::SessionRepository;
use timepool_database::repositories::user::UserRepository;
use timepool_service::prediction::PredictionService;
use timepool_service::session::SessionService;
use timepool_service::user::UserService;
use timepool_service::winner::WinnerService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Session repository.
    pub session_repo: Arc<SessionRepository>,
    /// Prediction repository.
    pub prediction_repo: Arc<PredictionRepository>,
    /// Admin credential repository.
    pub admin_repo: Arc<AdminCredentialRepository>,

    // ── Auth ─────────────────────────────────────────────────
    /// Admin identity gate.
    pub admin_gate: Arc<AdminGate>,

    // ── Services ─────────────────────────────────────────────
    /// User registration service.
    pub user_service: Arc<UserService>,
    /// Session lifecycle service.
    pub session_service: Arc<SessionService>,
    /// Prediction registry service.
    pub prediction_service: Arc<PredictionService>,
    /// Winner resolver service.
    pub winner_service: Arc<WinnerService>,
}

impl AppState {
    /// Wires repositories, the admin gate, and services over a pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
        let prediction_repo = Arc::new(PredictionRepository::new(db_pool.clone()));
        let admin_repo = Arc::new(AdminCredentialRepository::new(db_pool.clone()));

        let admin_gate = Arc::new(AdminGate::new(
            Arc::clone(&admin_repo),
            PasswordHasher::new(),
            PasswordPolicy::new(&config.auth),
        ));

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
        let session_service = Arc::new(SessionService::new(Arc::clone(&session_repo)));
        let prediction_service = Arc::new(PredictionService::new(
            Arc::clone(&prediction_repo),
            Arc::clone(&session_repo),
        ));
        let winner_service = Arc::new(WinnerService::new(
            Arc::clone(&prediction_repo),
            Arc::clone(&session_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            user_repo,
            session_repo,
            prediction_repo,
            admin_repo,
            admin_gate,
            user_service,
            session_service,
            prediction_service,
            winner_service,
        }
    }
}
