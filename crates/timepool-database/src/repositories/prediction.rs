//! Prediction repository implementation.
//!
//! Uniqueness of `(user_id, session_id)` and `(session_id, predicted_time)`
//! is guaranteed by the database constraints; the pre-checks inside
//! [`PredictionRepository::submit`] exist to produce the richer user-facing
//! messages, and a raced insert is still translated into the same error
//! taxonomy from the constraint violation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use timepool_core::error::{AppError, ErrorKind};
use timepool_core::result::AppResult;
use timepool_entity::prediction::model::{CreatePrediction, Prediction};
use timepool_entity::prediction::projection::{PredictionWithUser, PredictionWithUserAndSession};
use timepool_entity::session::Session;
use timepool_entity::user::{User, UserRole};

/// Prediction columns plus the joined user, with aliased column names.
#[derive(Debug, FromRow)]
struct PredictionUserRow {
    id: Uuid,
    user_id: Uuid,
    session_id: Uuid,
    predicted_time: String,
    predicted_minutes: i32,
    difference_minutes: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    u_id: Uuid,
    u_first_name: String,
    u_last_name: String,
    u_email: Option<String>,
    u_work_area: String,
    u_role: UserRole,
    u_created_at: DateTime<Utc>,
    u_updated_at: DateTime<Utc>,
}

const PREDICTION_USER_COLUMNS: &str = "p.id, p.user_id, p.session_id, p.predicted_time, \
     p.predicted_minutes, p.difference_minutes, p.created_at, p.updated_at, \
     u.id AS u_id, u.first_name AS u_first_name, u.last_name AS u_last_name, \
     u.email AS u_email, u.work_area AS u_work_area, u.role AS u_role, \
     u.created_at AS u_created_at, u.updated_at AS u_updated_at";

impl From<PredictionUserRow> for PredictionWithUser {
    fn from(row: PredictionUserRow) -> Self {
        Self {
            prediction: Prediction {
                id: row.id,
                user_id: row.user_id,
                session_id: row.session_id,
                predicted_time: row.predicted_time,
                predicted_minutes: row.predicted_minutes,
                difference_minutes: row.difference_minutes,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            user: User {
                id: row.u_id,
                first_name: row.u_first_name,
                last_name: row.u_last_name,
                email: row.u_email,
                work_area: row.u_work_area,
                role: row.u_role,
                created_at: row.u_created_at,
                updated_at: row.u_updated_at,
            },
        }
    }
}

/// Prediction columns plus the joined user and session.
#[derive(Debug, FromRow)]
struct PredictionUserSessionRow {
    #[sqlx(flatten)]
    base: PredictionUserRow,
    s_id: Uuid,
    s_name: String,
    s_start_time: Option<String>,
    s_end_time: Option<String>,
    s_actual_duration_minutes: Option<i32>,
    s_is_closed: bool,
    s_created_by: Uuid,
    s_created_at: DateTime<Utc>,
    s_updated_at: DateTime<Utc>,
}

impl From<PredictionUserSessionRow> for PredictionWithUserAndSession {
    fn from(row: PredictionUserSessionRow) -> Self {
        let with_user = PredictionWithUser::from(row.base);
        Self {
            prediction: with_user.prediction,
            user: with_user.user,
            session: Session {
                id: row.s_id,
                name: row.s_name,
                start_time: row.s_start_time,
                end_time: row.s_end_time,
                actual_duration_minutes: row.s_actual_duration_minutes,
                is_closed: row.s_is_closed,
                created_by: row.s_created_by,
                created_at: row.s_created_at,
                updated_at: row.s_updated_at,
            },
        }
    }
}

/// Repository for prediction submission and query operations.
#[derive(Debug, Clone)]
pub struct PredictionRepository {
    pool: PgPool,
}

impl PredictionRepository {
    /// Create a new prediction repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a prediction, running the duplicate pre-checks and the insert
    /// inside a single transaction.
    ///
    /// Errors: `DuplicateUser` when the user already has a prediction for
    /// the session; `DuplicateTime` (naming the other user) when the exact
    /// time was already taken. A constraint violation from a raced insert
    /// maps to the same kinds, without the other user's name.
    pub async fn submit(&self, data: &CreatePrediction) -> AppResult<Prediction> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let existing_by_user: Option<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM predictions WHERE user_id = $1 AND session_id = $2",
        )
        .bind(data.user_id)
        .bind(data.session_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check user prediction", e)
        })?;

        if existing_by_user.is_some() {
            return Err(AppError::duplicate_user(
                "You have already submitted a prediction for this session",
            ));
        }

        let existing_by_time: Option<(String, String)> = sqlx::query_as(
            "SELECT u.first_name, u.last_name FROM predictions p \
             JOIN users u ON u.id = p.user_id \
             WHERE p.session_id = $1 AND p.predicted_time = $2",
        )
        .bind(data.session_id)
        .bind(&data.predicted_time)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check prediction time", e)
        })?;

        if let Some((first_name, last_name)) = existing_by_time {
            return Err(AppError::duplicate_time(format!(
                "The prediction {} was already submitted by another user ({} {})",
                data.predicted_time, first_name, last_name
            )));
        }

        let prediction = sqlx::query_as::<_, Prediction>(
            "INSERT INTO predictions (user_id, session_id, predicted_time, predicted_minutes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.session_id)
        .bind(&data.predicted_time)
        .bind(data.predicted_minutes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| translate_insert_error(e, &data.predicted_time))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit prediction", e)
        })?;

        Ok(prediction)
    }

    /// List a session's predictions with their users, newest first.
    pub async fn find_by_session(&self, session_id: Uuid) -> AppResult<Vec<PredictionWithUser>> {
        let rows = sqlx::query_as::<_, PredictionUserRow>(&format!(
            "SELECT {PREDICTION_USER_COLUMNS} FROM predictions p \
             JOIN users u ON u.id = p.user_id \
             WHERE p.session_id = $1 \
             ORDER BY p.created_at DESC"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list session predictions", e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List every prediction with its user and session, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<PredictionWithUserAndSession>> {
        let rows = sqlx::query_as::<_, PredictionUserSessionRow>(&format!(
            "SELECT {PREDICTION_USER_COLUMNS}, \
                    s.id AS s_id, s.name AS s_name, s.start_time AS s_start_time, \
                    s.end_time AS s_end_time, \
                    s.actual_duration_minutes AS s_actual_duration_minutes, \
                    s.is_closed AS s_is_closed, s.created_by AS s_created_by, \
                    s.created_at AS s_created_at, s.updated_at AS s_updated_at \
             FROM predictions p \
             JOIN users u ON u.id = p.user_id \
             JOIN sessions s ON s.id = p.session_id \
             ORDER BY p.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list predictions", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// List the bare predictions of a session (no joins), for recomputation.
    pub async fn find_bare_by_session(&self, session_id: Uuid) -> AppResult<Vec<Prediction>> {
        sqlx::query_as::<_, Prediction>(
            "SELECT * FROM predictions WHERE session_id = $1 ORDER BY created_at ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list session predictions", e)
        })
    }

    /// List a session's predictions that have a computed difference,
    /// ordered best-first with earliest submission breaking ties.
    pub async fn find_scored_by_session(
        &self,
        session_id: Uuid,
    ) -> AppResult<Vec<PredictionWithUser>> {
        let rows = sqlx::query_as::<_, PredictionUserRow>(&format!(
            "SELECT {PREDICTION_USER_COLUMNS} FROM predictions p \
             JOIN users u ON u.id = p.user_id \
             WHERE p.session_id = $1 AND p.difference_minutes IS NOT NULL \
             ORDER BY p.difference_minutes ASC, p.created_at ASC"
        ))
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to rank predictions", e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Overwrite the stored difference for one prediction.
    pub async fn update_difference(&self, id: Uuid, difference_minutes: i32) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE predictions SET difference_minutes = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(difference_minutes)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update difference", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Prediction {id} not found")));
        }
        Ok(())
    }
}

/// Map a prediction-insert failure onto the duplicate taxonomy.
fn translate_insert_error(e: sqlx::Error, predicted_time: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("predictions_user_session_key") =>
        {
            AppError::duplicate_user("You have already submitted a prediction for this session")
        }
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("predictions_session_time_key") =>
        {
            AppError::duplicate_time(format!(
                "The prediction {predicted_time} was already submitted by another user \
                 for this session"
            ))
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to create prediction", e),
    }
}
