//! Repository implementations, one per record type.

pub mod admin;
pub mod prediction;
pub mod session;
pub mod user;

pub use admin::AdminCredentialRepository;
pub use prediction::PredictionRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
