//! Response DTOs.
//!
//! Every endpoint wraps its payload in [`ApiResponse`]: `success` is always
//! present, `error` only on failure, `data` only on success.

use serde::{Deserialize, Serialize};

/// The uniform response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable error message, absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Response payload, absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    /// Creates a failed response carrying only an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
}

/// Result of a difference recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferencesSummary {
    /// Number of predictions whose difference was recomputed.
    pub updated: usize,
}
