//! Session lifecycle — creation, time assignment, open/close gating.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use timepool_core::error::AppError;
use timepool_core::result::AppResult;
use timepool_core::time;
use timepool_database::repositories::session::SessionRepository;
use timepool_entity::session::model::{CreateSession, Session};

use crate::context::AdminContext;

/// Manages the session lifecycle.
///
/// Sessions move from created (no times, open) to timed (times recorded),
/// and can be closed and reopened independently at any point. There is no
/// terminal state; sessions persist indefinitely.
#[derive(Debug, Clone)]
pub struct SessionService {
    /// Session repository.
    sessions: Arc<SessionRepository>,
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(sessions: Arc<SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Creates a session with only a name; times are recorded later.
    pub async fn create(&self, ctx: &AdminContext, name: &str) -> AppResult<Session> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Session name must not be empty"));
        }

        let session = self
            .sessions
            .create(&CreateSession {
                name: name.to_string(),
                created_by: ctx.admin_id,
            })
            .await?;

        info!(session_id = %session.id, name = %session.name, admin = %ctx.username, "Session created");
        Ok(session)
    }

    /// Records start and end times, recomputing the duration.
    ///
    /// May be called repeatedly; each call fully overwrites the previous
    /// assignment. Closing a session does not block this.
    pub async fn assign_times(&self, id: Uuid, start_time: &str, end_time: &str) -> AppResult<Session> {
        if !time::is_valid_time(start_time) {
            return Err(AppError::invalid_format(
                "Invalid start time format. Use HH:MM",
            ));
        }
        if !time::is_valid_time(end_time) {
            return Err(AppError::invalid_format(
                "Invalid end time format. Use HH:MM",
            ));
        }

        let actual_duration_minutes = time::duration_between(start_time, end_time)?;

        let session = self
            .sessions
            .update_times(id, start_time, end_time, actual_duration_minutes)
            .await?;

        info!(
            session_id = %session.id,
            start = start_time,
            end = end_time,
            duration_minutes = actual_duration_minutes,
            "Session times assigned"
        );
        Ok(session)
    }

    /// Closes a session to new predictions. Idempotent.
    pub async fn close(&self, id: Uuid) -> AppResult<Session> {
        let session = self.sessions.set_closed(id, true).await?;
        info!(session_id = %session.id, "Session closed");
        Ok(session)
    }

    /// Reopens a session for predictions. Idempotent.
    pub async fn open(&self, id: Uuid) -> AppResult<Session> {
        let session = self.sessions.set_closed(id, false).await?;
        info!(session_id = %session.id, "Session opened");
        Ok(session)
    }

    /// Lists all sessions, newest first.
    pub async fn get_all(&self) -> AppResult<Vec<Session>> {
        self.sessions.find_all().await
    }

    /// Fetches a session by ID.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Session> {
        self.sessions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))
    }
}
