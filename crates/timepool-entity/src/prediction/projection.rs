//! Typed join projections over predictions.
//!
//! Listings attach the related user (and session) as explicit typed fields
//! rather than loosely-shaped joined data.

use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::user::User;

use super::model::Prediction;

/// A prediction together with its submitting user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionWithUser {
    /// The prediction record.
    pub prediction: Prediction,
    /// The user who submitted it.
    pub user: User,
}

/// A prediction together with its submitting user and owning session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionWithUserAndSession {
    /// The prediction record.
    pub prediction: Prediction,
    /// The user who submitted it.
    pub user: User,
    /// The session it belongs to.
    pub session: Session,
}

/// The resolved winner of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnerResult {
    /// The winning user.
    pub user: User,
    /// The winning prediction.
    pub prediction: Prediction,
    /// The session's actual duration as `HH:MM` text.
    pub actual_duration: String,
    /// The winning guess as `HH:MM` text.
    pub predicted_time: String,
    /// Absolute distance from the actual duration, in minutes.
    pub difference_minutes: i32,
    /// Human-readable difference, e.g. `"+15 min"`.
    pub difference_display: String,
}
