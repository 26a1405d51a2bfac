//! Admin credential repository implementation.

use sqlx::PgPool;

use timepool_core::error::{AppError, ErrorKind};
use timepool_core::result::AppResult;
use timepool_entity::admin::model::{AdminCredential, CreateAdminCredential};

/// Repository for stored admin credentials.
#[derive(Debug, Clone)]
pub struct AdminCredentialRepository {
    pool: PgPool,
}

impl AdminCredentialRepository {
    /// Create a new admin credential repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a credential by username (case-sensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminCredential>> {
        sqlx::query_as::<_, AdminCredential>(
            "SELECT * FROM admin_credentials WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find admin credential", e)
        })
    }

    /// Store a new admin credential.
    pub async fn create(&self, data: &CreateAdminCredential) -> AppResult<AdminCredential> {
        sqlx::query_as::<_, AdminCredential>(
            "INSERT INTO admin_credentials (username, password_hash) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("admin_credentials_username_key") =>
            {
                AppError::already_exists(format!(
                    "Admin user '{}' already exists",
                    data.username
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin credential", e),
        })
    }

    /// Count stored admin credentials.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_credentials")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count admin credentials", e)
            })?;
        Ok(count as u64)
    }
}
