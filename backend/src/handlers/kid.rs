//! HTTP handlers for kid profile endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::kid::{CreateKidInput, KidProfile, KidService, UpdateKidInput};
use crate::AppState;

/// List all kid profiles for the authenticated parent
pub async fn list_kids(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<KidProfile>>> {
    let service = KidService::new(state.db);
    let kids = service.list_kids(current_user.0.user_id).await?;
    Ok(Json(kids))
}

/// Get a kid profile by ID
pub async fn get_kid(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(kid_id): Path<Uuid>,
) -> AppResult<Json<KidProfile>> {
    let service = KidService::new(state.db);
    let kid = service.get_kid(current_user.0.user_id, kid_id).await?;
    Ok(Json(kid))
}

/// Create a new kid profile
pub async fn create_kid(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateKidInput>,
) -> AppResult<(StatusCode, Json<KidProfile>)> {
    let service = KidService::new(state.db);
    let kid = service.create_kid(current_user.0.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(kid)))
}

/// Update a kid profile
pub async fn update_kid(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(kid_id): Path<Uuid>,
    Json(input): Json<UpdateKidInput>,
) -> AppResult<Json<KidProfile>> {
    let service = KidService::new(state.db);
    let kid = service
        .update_kid(current_user.0.user_id, kid_id, input)
        .await?;
    Ok(Json(kid))
}

/// Delete a kid profile
pub async fn delete_kid(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(kid_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = KidService::new(state.db);
    service.delete_kid(current_user.0.user_id, kid_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
