//! Prediction submission and listing handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use timepool_entity::prediction::model::Prediction;
use timepool_entity::prediction::projection::{PredictionWithUser, PredictionWithUserAndSession};

use crate::dto::request::CreatePredictionRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/predictions
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePredictionRequest>,
) -> Result<Json<ApiResponse<Prediction>>, ApiError> {
    let prediction = state
        .prediction_service
        .submit(req.user_id, req.session_id, &req.predicted_time)
        .await?;
    Ok(Json(ApiResponse::ok(prediction)))
}

/// GET /api/sessions/{id}/predictions
pub async fn list_by_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PredictionWithUser>>>, ApiError> {
    let predictions = state.prediction_service.by_session(session_id).await?;
    Ok(Json(ApiResponse::ok(predictions)))
}

/// GET /api/predictions
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PredictionWithUserAndSession>>>, ApiError> {
    let predictions = state.prediction_service.all().await?;
    Ok(Json(ApiResponse::ok(predictions)))
}
