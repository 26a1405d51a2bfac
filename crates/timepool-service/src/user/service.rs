//! User registration — get-or-create semantics over the full-name pair.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use timepool_core::error::{AppError, ErrorKind};
use timepool_core::result::AppResult;
use timepool_database::repositories::user::UserRepository;
use timepool_entity::user::model::{CreateUser, User};
use timepool_entity::user::role::UserRole;

/// Handles user registration and lookup.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
}

/// Data for registering a user.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterUserRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Department or team.
    pub work_area: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Role; defaults to `user`.
    pub role: Option<UserRole>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// Registers a user, returning the existing record when the same
    /// full name (compared case-insensitively) is already taken.
    ///
    /// A uniqueness violation from a raced insert resolves the same way:
    /// the existing record is fetched and returned instead of an error.
    pub async fn register(&self, req: RegisterUserRequest) -> AppResult<User> {
        let first_name = req.first_name.trim();
        let last_name = req.last_name.trim();
        let work_area = req.work_area.trim();

        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::validation("First and last name are required"));
        }
        if work_area.is_empty() {
            return Err(AppError::validation("Work area is required"));
        }

        if let Some(existing) = self.users.find_by_full_name(first_name, last_name).await? {
            return Ok(existing);
        }

        let data = CreateUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: req.email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()),
            work_area: work_area.to_string(),
            role: req.role.unwrap_or_default(),
        };

        match self.users.create(&data).await {
            Ok(user) => {
                info!(user_id = %user.id, name = %user.display_name(), "User registered");
                Ok(user)
            }
            Err(e) if e.kind == ErrorKind::AlreadyExists => self
                .users
                .find_by_full_name(first_name, last_name)
                .await?
                .ok_or(e),
            Err(e) => Err(e),
        }
    }

    /// Lists all users, newest first.
    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Fetches a user by ID.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Fetches a user by full name, compared case-insensitively.
    pub async fn get_by_full_name(&self, first_name: &str, last_name: &str) -> AppResult<User> {
        self.users
            .find_by_full_name(first_name.trim(), last_name.trim())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
