//! Prediction submission and listing.

pub mod service;

pub use service::PredictionService;
