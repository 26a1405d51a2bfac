//! Prediction entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One user's guessed duration for a session.
///
/// Each user owns at most one prediction per session, and no two users may
/// submit the identical time for the same session. `difference_minutes` is
/// owned by the winner resolver: it stays unset until the session is timed
/// and is overwritten on every recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Prediction {
    /// Unique prediction identifier.
    pub id: Uuid,
    /// The user who submitted the guess.
    pub user_id: Uuid,
    /// The session the guess is for.
    pub session_id: Uuid,
    /// The guessed duration as `HH:MM` text.
    pub predicted_time: String,
    /// The guessed duration converted to minutes.
    pub predicted_minutes: i32,
    /// Absolute distance from the actual duration, once computed.
    pub difference_minutes: Option<i32>,
    /// When the prediction was submitted.
    pub created_at: DateTime<Utc>,
    /// When the prediction was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePrediction {
    /// The submitting user.
    pub user_id: Uuid,
    /// The target session.
    pub session_id: Uuid,
    /// The guessed duration as `HH:MM` text.
    pub predicted_time: String,
    /// The guessed duration in minutes.
    pub predicted_minutes: i32,
}
