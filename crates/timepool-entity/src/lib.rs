//! # timepool-entity
//!
//! Domain entity models for TimePool: users, prediction sessions,
//! predictions (with their typed join projections), and stored admin
//! credentials.

pub mod admin;
pub mod prediction;
pub mod session;
pub mod user;

pub use admin::{AdminCredential, AdminIdentity};
pub use prediction::{Prediction, PredictionWithUser, PredictionWithUserAndSession, WinnerResult};
pub use session::Session;
pub use user::{User, UserRole};
