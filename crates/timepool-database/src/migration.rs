//! Database migration runner and schema verification.

use sqlx::PgPool;
use tracing::info;

use timepool_core::error::{AppError, ErrorKind};

/// Tables the application requires.
const REQUIRED_TABLES: [&str; 4] = ["users", "sessions", "predictions", "admin_credentials"];

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Return the names of required tables missing from the connected database.
pub async fn missing_tables(pool: &PgPool) -> Result<Vec<String>, AppError> {
    let existing: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables \
         WHERE table_schema = 'public' AND table_name = ANY($1)",
    )
    .bind(REQUIRED_TABLES.map(String::from).to_vec())
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to inspect schema", e))?;

    Ok(REQUIRED_TABLES
        .iter()
        .filter(|t| !existing.iter().any(|e| e == *t))
        .map(|t| (*t).to_string())
        .collect())
}
