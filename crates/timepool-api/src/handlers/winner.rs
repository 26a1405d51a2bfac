//! Difference recomputation and winner handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use timepool_entity::prediction::projection::WinnerResult;

use crate::dto::response::{ApiResponse, DifferencesSummary};
use crate::error::ApiError;
use crate::extractors::AdminAuth;
use crate::state::AppState;

/// POST /api/sessions/{id}/differences
pub async fn recompute_differences(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ApiResponse<DifferencesSummary>>, ApiError> {
    let updated = state.winner_service.recompute_differences(session_id).await?;
    Ok(Json(ApiResponse::ok(DifferencesSummary { updated })))
}

/// GET /api/sessions/{id}/winner
///
/// Public: the winner screen is shown to every participant.
pub async fn winner(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ApiResponse<WinnerResult>>, ApiError> {
    let result = state.winner_service.winner(session_id).await?;
    Ok(Json(ApiResponse::ok(result)))
}
