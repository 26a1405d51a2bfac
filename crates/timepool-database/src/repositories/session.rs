//! Session repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use timepool_core::error::{AppError, ErrorKind};
use timepool_core::result::AppResult;
use timepool_entity::session::model::{CreateSession, Session};

/// Repository for session CRUD and lifecycle operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a session by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// List all sessions, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sessions", e))
    }

    /// Create a new session with no recorded times, open for predictions.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (name, created_by) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Assign start/end times and the recomputed duration, overwriting any
    /// previous assignment. The three fields always change together.
    pub async fn update_times(
        &self,
        id: Uuid,
        start_time: &str,
        end_time: &str,
        actual_duration_minutes: i32,
    ) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "UPDATE sessions SET start_time = $2, end_time = $3, \
                                 actual_duration_minutes = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(start_time)
        .bind(end_time)
        .bind(actual_duration_minutes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update session times", e))?
        .ok_or_else(|| AppError::not_found(format!("Session {id} not found")))
    }

    /// Set the closed flag. Idempotent.
    pub async fn set_closed(&self, id: Uuid, is_closed: bool) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "UPDATE sessions SET is_closed = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_closed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update session", e))?
        .ok_or_else(|| AppError::not_found(format!("Session {id} not found")))
    }
}
