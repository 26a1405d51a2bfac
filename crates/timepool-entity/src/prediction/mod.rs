//! Prediction entity and its join projections.

pub mod model;
pub mod projection;

pub use model::{CreatePrediction, Prediction};
pub use projection::{PredictionWithUser, PredictionWithUserAndSession, WinnerResult};
