//! HTTP handlers, grouped by domain.

pub mod auth;
pub mod health;
pub mod prediction;
pub mod session;
pub mod user;
pub mod winner;

use validator::Validate;

use timepool_core::error::AppError;

use crate::error::ApiError;

/// Runs DTO validation, mapping failures into the validation error kind.
pub(crate) fn validated<T: Validate>(req: T) -> Result<T, ApiError> {
    req.validate()
        .map_err(|e| ApiError::from(AppError::validation(e.to_string())))?;
    Ok(req)
}
