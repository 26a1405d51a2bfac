//! # timepool-auth
//!
//! Admin credential handling: Argon2id password hashing with per-password
//! random salts, a configurable password policy for bootstrap, and the
//! admin identity gate that fronts session administration.

pub mod gate;
pub mod password;

pub use gate::AdminGate;
pub use password::{PasswordHasher, PasswordPolicy};
