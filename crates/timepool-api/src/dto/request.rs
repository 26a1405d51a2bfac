//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use timepool_entity::user::UserRole;

/// User registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Department or team.
    #[validate(length(min = 1, message = "Work area is required"))]
    pub work_area: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Role; defaults to `user`.
    pub role: Option<UserRole>,
}

/// User lookup by full name (query string).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLookupQuery {
    /// First name, matched case-insensitively.
    pub first_name: String,
    /// Last name, matched case-insensitively.
    pub last_name: String,
}

/// Session creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSessionRequest {
    /// Display name of the round.
    #[validate(length(min = 1, message = "Session name is required"))]
    pub name: String,
}

/// Session time assignment request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSessionTimesRequest {
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
}

/// Prediction submission request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePredictionRequest {
    /// The submitting user.
    pub user_id: Uuid,
    /// The target session.
    pub session_id: Uuid,
    /// The guessed duration as `HH:MM`.
    pub predicted_time: String,
}

/// Admin login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin bootstrap request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdminRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password (checked against the password policy).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
