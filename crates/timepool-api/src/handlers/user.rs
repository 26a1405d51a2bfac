//! User registration and lookup handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use timepool_entity::user::User;
use timepool_service::user::service::RegisterUserRequest as SvcRegisterUser;

use crate::dto::request::{RegisterUserRequest, UserLookupQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::handlers::validated;
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let req = validated(req)?;

    let user = state
        .user_service
        .register(SvcRegisterUser {
            first_name: req.first_name,
            last_name: req.last_name,
            work_area: req.work_area,
            email: req.email,
            role: req.role,
        })
        .await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.user_service.get_all().await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// GET /api/users/lookup?first_name=..&last_name=..
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<UserLookupQuery>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .user_service
        .get_by_full_name(&query.first_name, &query.last_name)
        .await?;
    Ok(Json(ApiResponse::ok(user)))
}
