//! # timepool-core
//!
//! Core building blocks shared by every TimePool crate: the unified error
//! type, the result alias, configuration schemas, and the pure time codec
//! that converts between `HH:MM` text and integer minutes.

pub mod config;
pub mod error;
pub mod result;
pub mod time;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
