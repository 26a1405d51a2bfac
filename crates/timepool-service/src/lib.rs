//! # timepool-service
//!
//! Business logic service layer for TimePool. Each service orchestrates
//! repositories and the time codec to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod prediction;
pub mod session;
pub mod user;
pub mod winner;

pub use context::AdminContext;
pub use prediction::PredictionService;
pub use session::SessionService;
pub use user::UserService;
pub use winner::WinnerService;
