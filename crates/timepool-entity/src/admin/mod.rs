//! Admin credential entity.

pub mod model;

pub use model::{AdminCredential, AdminIdentity, CreateAdminCredential};
