//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A timed competitive round users submit predictions against.
///
/// A session is created with only a name; start/end times are recorded
/// later by an admin, any number of times, with the duration recomputed on
/// every assignment. The closed flag gates new predictions only — timing
/// and winner resolution stay available on a closed session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// Display name of the round.
    pub name: String,
    /// Recorded start time (`HH:MM`), if timed.
    pub start_time: Option<String>,
    /// Recorded end time (`HH:MM`), if timed.
    pub end_time: Option<String>,
    /// Wraparound-aware duration between start and end, in minutes.
    pub actual_duration_minutes: Option<i32>,
    /// When true, no further predictions are accepted.
    pub is_closed: bool,
    /// The admin who created this session.
    pub created_by: Uuid,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Whether start/end times have been recorded.
    pub fn is_timed(&self) -> bool {
        self.actual_duration_minutes.is_some()
    }

    /// Whether the session currently accepts new predictions.
    pub fn accepts_predictions(&self) -> bool {
        !self.is_closed
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// Display name of the round.
    pub name: String,
    /// The admin creating the session.
    pub created_by: Uuid,
}
