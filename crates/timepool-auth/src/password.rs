//! Password hashing and policy enforcement for admin credentials.
//!
//! Credentials are only ever stored as Argon2id hashes with a random
//! per-password salt; there is no plaintext comparison path.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use timepool_core::config::auth::AuthConfig;
use timepool_core::error::AppError;
use timepool_core::result::AppResult;

/// Argon2id password hashing and verification.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a freshly generated salt.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::database(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; an error only for malformed hashes
    /// or verifier failures.
    pub fn verify(&self, password: &str, stored_hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::database(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::database(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

/// Policy applied to new admin passwords at bootstrap.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    require_strong: bool,
}

impl PasswordPolicy {
    /// Creates a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length as usize,
            require_strong: config.require_strong_passwords,
        }
    }

    /// Validates a candidate password, returning the first violation found.
    pub fn validate(&self, password: &str) -> AppResult<()> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if self.require_strong {
            let estimate = zxcvbn::zxcvbn(password, &[]);
            if estimate.score() < zxcvbn::Score::Three {
                return Err(AppError::validation(
                    "Password is too weak. Please use a longer or less predictable password",
                ));
            }
        }

        Ok(())
    }
}
