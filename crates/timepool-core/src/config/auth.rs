//! Admin authentication configuration.

use serde::{Deserialize, Serialize};

/// Settings for admin credential handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum length for new admin passwords.
    #[serde(default = "default_password_min_length")]
    pub password_min_length: u32,
    /// Whether new admin passwords must pass the entropy check.
    #[serde(default = "default_true")]
    pub require_strong_passwords: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min_length(),
            require_strong_passwords: default_true(),
        }
    }
}

fn default_password_min_length() -> u32 {
    8
}

fn default_true() -> bool {
    true
}
