//! HTTP handlers for story sharing

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::share::{ShareLink, ShareService, SharedStory};
use crate::AppState;

/// Create (or rotate) a share link for a story
pub async fn create_share(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(story_id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<ShareLink>)> {
    let service = ShareService::new(state.db);
    let share = service
        .create_share(current_user.0.user_id, story_id)
        .await?;
    Ok((StatusCode::CREATED, Json(share)))
}

/// Public endpoint resolving a share token into a readable story
pub async fn get_shared_story(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<SharedStory>> {
    let service = ShareService::new(state.db);
    let story = service.resolve_share(&token).await?;
    Ok(Json(story))
}
