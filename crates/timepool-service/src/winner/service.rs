//! Winner resolver — recomputes per-prediction differences and selects the
//! closest guess.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use timepool_core::error::AppError;
use timepool_core::result::AppResult;
use timepool_core::time;
use timepool_database::repositories::prediction::PredictionRepository;
use timepool_database::repositories::session::SessionRepository;
use timepool_entity::prediction::projection::{PredictionWithUser, WinnerResult};

/// Recomputes differences and resolves session winners on demand.
#[derive(Debug, Clone)]
pub struct WinnerService {
    /// Prediction repository.
    predictions: Arc<PredictionRepository>,
    /// Session repository.
    sessions: Arc<SessionRepository>,
}

impl WinnerService {
    /// Creates a new winner service.
    pub fn new(predictions: Arc<PredictionRepository>, sessions: Arc<SessionRepository>) -> Self {
        Self {
            predictions,
            sessions,
        }
    }

    /// Recomputes and stores the difference for every prediction of a
    /// session. Returns the number of predictions updated.
    ///
    /// Fails with `SessionNotTimed` until the session has a recorded
    /// duration; stored differences are always overwritten, never trusted.
    pub async fn recompute_differences(&self, session_id: Uuid) -> AppResult<usize> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        let actual_minutes = session.actual_duration_minutes.ok_or_else(|| {
            AppError::session_not_timed(format!(
                "Session \"{}\" has no recorded duration yet",
                session.name
            ))
        })?;

        let predictions = self.predictions.find_bare_by_session(session_id).await?;
        let count = predictions.len();

        for prediction in &predictions {
            let difference = time::difference(prediction.predicted_minutes, actual_minutes);
            self.predictions
                .update_difference(prediction.id, difference)
                .await?;
        }

        info!(session_id = %session_id, predictions = count, "Differences recomputed");
        Ok(count)
    }

    /// Resolves the winner of a session.
    ///
    /// Differences are recomputed first, then the prediction with the
    /// minimal difference wins; exact ties go to the earliest submission.
    pub async fn winner(&self, session_id: Uuid) -> AppResult<WinnerResult> {
        self.recompute_differences(session_id).await?;

        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))?;
        let actual_minutes = session.actual_duration_minutes.ok_or_else(|| {
            AppError::session_not_timed(format!(
                "Session \"{}\" has no recorded duration yet",
                session.name
            ))
        })?;

        let scored = self.predictions.find_scored_by_session(session_id).await?;
        let best = pick_winner(&scored)
            .ok_or_else(|| AppError::not_found("No predictions found for this session"))?;

        let difference_minutes = best.prediction.difference_minutes.ok_or_else(|| {
            AppError::database("Scored prediction is missing its difference")
        })?;

        Ok(WinnerResult {
            user: best.user.clone(),
            prediction: best.prediction.clone(),
            actual_duration: time::format_minutes(actual_minutes),
            predicted_time: best.prediction.predicted_time.clone(),
            difference_minutes,
            difference_display: time::format_difference(difference_minutes),
        })
    }
}

/// Selects the prediction with the smallest difference; exact ties are
/// broken by the earliest submission time, independent of input order.
fn pick_winner(scored: &[PredictionWithUser]) -> Option<&PredictionWithUser> {
    scored.iter().min_by_key(|p| {
        (
            p.prediction.difference_minutes.unwrap_or(i32::MAX),
            p.prediction.created_at,
        )
    })
}
