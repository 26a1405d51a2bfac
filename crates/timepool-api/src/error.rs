//! Maps domain `AppError` values onto HTTP responses.
//!
//! Failures are never surfaced as bare status codes: the body is always
//! the same `{success, error}` envelope the success path uses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use timepool_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiResponse;

/// Newtype carrying an [`AppError`] out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::InvalidFormat | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::SessionClosed
            | ErrorKind::SessionNotTimed
            | ErrorKind::DuplicateUser
            | ErrorKind::DuplicateTime
            | ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ErrorKind::Configuration | ErrorKind::Database | ErrorKind::Internal => {
                tracing::error!(kind = %self.0.kind, error = %self.0.message, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiResponse::<serde_json::Value>::failure(self.0.message);
        (status, Json(body)).into_response()
    }
}
