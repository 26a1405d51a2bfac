//! Admin auth handlers — login and bootstrap.

use axum::Json;
use axum::extract::State;

use timepool_entity::admin::AdminIdentity;

use crate::dto::request::{CreateAdminRequest, LoginRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AdminAuth;
use crate::handlers::validated;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AdminIdentity>>, ApiError> {
    let req = validated(req)?;

    let identity = state
        .admin_gate
        .authenticate(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(identity)))
}

/// POST /api/auth/admins
///
/// Bootstrapping further admins requires an existing admin; the very first
/// credential is created through the CLI instead.
pub async fn create_admin(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Json(req): Json<CreateAdminRequest>,
) -> Result<Json<ApiResponse<AdminIdentity>>, ApiError> {
    let req = validated(req)?;

    let identity = state
        .admin_gate
        .bootstrap(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(identity)))
}
