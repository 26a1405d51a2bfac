//! Prediction registry — validates and stores guesses against the session
//! lifecycle state.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use timepool_core::error::AppError;
use timepool_core::result::AppResult;
use timepool_core::time;
use timepool_database::repositories::prediction::PredictionRepository;
use timepool_database::repositories::session::SessionRepository;
use timepool_entity::prediction::model::{CreatePrediction, Prediction};
use timepool_entity::prediction::projection::{PredictionWithUser, PredictionWithUserAndSession};

/// Accepts, validates, and stores predictions.
#[derive(Debug, Clone)]
pub struct PredictionService {
    /// Prediction repository.
    predictions: Arc<PredictionRepository>,
    /// Session repository.
    sessions: Arc<SessionRepository>,
}

impl PredictionService {
    /// Creates a new prediction service.
    pub fn new(predictions: Arc<PredictionRepository>, sessions: Arc<SessionRepository>) -> Self {
        Self {
            predictions,
            sessions,
        }
    }

    /// Submits a user's guess for a session.
    ///
    /// Checks run in a fixed order, each with its own error: time format,
    /// session existence, the closed gate, one-prediction-per-user, and
    /// unique-time-per-session. The duplicate checks and the insert run in
    /// one transaction in the repository; the database constraints remain
    /// the authoritative guard under concurrent submissions.
    pub async fn submit(
        &self,
        user_id: Uuid,
        session_id: Uuid,
        predicted_time: &str,
    ) -> AppResult<Prediction> {
        let predicted_time = predicted_time.trim();
        let predicted_minutes = time::parse_time(predicted_time)?;

        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        if session.is_closed {
            return Err(AppError::session_closed(format!(
                "Session \"{}\" is closed. No more predictions can be submitted",
                session.name
            )));
        }

        let prediction = self
            .predictions
            .submit(&CreatePrediction {
                user_id,
                session_id,
                predicted_time: predicted_time.to_string(),
                predicted_minutes,
            })
            .await?;

        info!(
            prediction_id = %prediction.id,
            user_id = %user_id,
            session_id = %session_id,
            predicted_time,
            "Prediction submitted"
        );
        Ok(prediction)
    }

    /// Lists a session's predictions with their users, newest first.
    pub async fn by_session(&self, session_id: Uuid) -> AppResult<Vec<PredictionWithUser>> {
        self.predictions.find_by_session(session_id).await
    }

    /// Lists every prediction with its user and session, newest first.
    pub async fn all(&self) -> AppResult<Vec<PredictionWithUserAndSession>> {
        self.predictions.find_all().await
    }
}
