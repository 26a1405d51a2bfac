//! Admin credential model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored admin login credential.
///
/// Usernames are compared case-sensitively. The password is stored only as
/// an Argon2id hash.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminCredential {
    /// Unique credential identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the credential was created.
    pub created_at: DateTime<Utc>,
    /// When the credential was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The authenticated admin identity returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminIdentity {
    /// Credential identifier.
    pub id: Uuid,
    /// Login name.
    pub username: String,
}

impl From<&AdminCredential> for AdminIdentity {
    fn from(credential: &AdminCredential) -> Self {
        Self {
            id: credential.id,
            username: credential.username.clone(),
        }
    }
}

/// Data required to store a new admin credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdminCredential {
    /// Login name.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
