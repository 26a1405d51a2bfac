//! Admin identity gate: credential verification and bootstrap.

use std::sync::Arc;

use tracing::info;

use timepool_core::error::AppError;
use timepool_core::result::AppResult;
use timepool_database::repositories::admin::AdminCredentialRepository;
use timepool_entity::admin::model::{AdminIdentity, CreateAdminCredential};

use crate::password::{PasswordHasher, PasswordPolicy};

/// A single message for both unknown-username and wrong-password failures,
/// so login attempts cannot probe which usernames exist.
const INVALID_LOGIN: &str = "Invalid username or password";

/// Verifies admin credentials and bootstraps new ones.
#[derive(Debug, Clone)]
pub struct AdminGate {
    credentials: Arc<AdminCredentialRepository>,
    hasher: PasswordHasher,
    policy: PasswordPolicy,
}

impl AdminGate {
    /// Creates a new admin gate.
    pub fn new(
        credentials: Arc<AdminCredentialRepository>,
        hasher: PasswordHasher,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            credentials,
            hasher,
            policy,
        }
    }

    /// Authenticates an admin by username (case-sensitive) and password.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<AdminIdentity> {
        let username = username.trim();

        let Some(credential) = self.credentials.find_by_username(username).await? else {
            return Err(AppError::invalid_credentials(INVALID_LOGIN));
        };

        if !self.hasher.verify(password, &credential.password_hash)? {
            return Err(AppError::invalid_credentials(INVALID_LOGIN));
        }

        info!(admin = %credential.username, "Admin authenticated");
        Ok(AdminIdentity::from(&credential))
    }

    /// Stores a new admin credential.
    ///
    /// Fails with `AlreadyExists` when the username is taken and with
    /// `Validation` when the password does not meet the policy.
    pub async fn bootstrap(&self, username: &str, password: &str) -> AppResult<AdminIdentity> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AppError::validation("Username must not be empty"));
        }

        if self.credentials.find_by_username(username).await?.is_some() {
            return Err(AppError::already_exists(format!(
                "Admin user '{username}' already exists"
            )));
        }

        self.policy.validate(password)?;
        let password_hash = self.hasher.hash(password)?;

        let credential = self
            .credentials
            .create(&CreateAdminCredential {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!(admin = %credential.username, "Admin credential created");
        Ok(AdminIdentity::from(&credential))
    }
}
