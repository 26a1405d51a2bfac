//! Session lifecycle handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use timepool_entity::session::Session;

use crate::dto::request::{CreateSessionRequest, UpdateSessionTimesRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AdminAuth;
use crate::handlers::validated;
use crate::state::AppState;

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    admin: AdminAuth,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<ApiResponse<Session>>, ApiError> {
    let req = validated(req)?;

    let session = state.session_service.create(admin.context(), &req.name).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// PUT /api/sessions/{id}/times
pub async fn update_times(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSessionTimesRequest>,
) -> Result<Json<ApiResponse<Session>>, ApiError> {
    let session = state
        .session_service
        .assign_times(id, req.start_time.trim(), req.end_time.trim())
        .await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/sessions/{id}/close
pub async fn close(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Session>>, ApiError> {
    let session = state.session_service.close(id).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/sessions/{id}/open
pub async fn open(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Session>>, ApiError> {
    let session = state.session_service.open(id).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// GET /api/sessions
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Session>>>, ApiError> {
    let sessions = state.session_service.get_all().await?;
    Ok(Json(ApiResponse::ok(sessions)))
}

/// GET /api/sessions/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Session>>, ApiError> {
    let session = state.session_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(session)))
}
