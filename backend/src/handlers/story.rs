//! HTTP handlers for story endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::external::StoryModelClient;
use crate::middleware::CurrentUser;
use crate::services::story::{
    GenerateStoryInput, QuizQuestion, Story, StoryDetail, StoryService, UpdateStoryInput,
};
use crate::AppState;
use shared::models::{PageSpread, QuizAnswer, QuizGrade};

#[derive(Deserialize)]
pub struct ListStoriesQuery {
    pub kid_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<QuizAnswer>,
}

/// Generate a new story for a kid
pub async fn generate_story(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<GenerateStoryInput>,
) -> AppResult<(StatusCode, Json<StoryDetail>)> {
    let client = StoryModelClient::new(&state.config.ai);
    let service = StoryService::new(state.db);
    let story = service
        .generate(current_user.0.user_id, input, &client)
        .await?;
    Ok((StatusCode::CREATED, Json(story)))
}

/// List stories, optionally filtered by kid
pub async fn list_stories(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<ListStoriesQuery>,
) -> AppResult<Json<Vec<Story>>> {
    let service = StoryService::new(state.db);
    let stories = service
        .list_stories(current_user.0.user_id, query.kid_id)
        .await?;
    Ok(Json(stories))
}

/// Get a story by ID with kid and quiz
pub async fn get_story(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(story_id): Path<Uuid>,
) -> AppResult<Json<StoryDetail>> {
    let service = StoryService::new(state.db);
    let story = service.get_story(current_user.0.user_id, story_id).await?;
    Ok(Json(story))
}

/// Get a story paginated into book spreads
pub async fn get_story_pages(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(story_id): Path<Uuid>,
) -> AppResult<Json<Vec<PageSpread>>> {
    let service = StoryService::new(state.db);
    let pages = service
        .get_story_pages(current_user.0.user_id, story_id)
        .await?;
    Ok(Json(pages))
}

/// Update story title or favorite flag
pub async fn update_story(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(story_id): Path<Uuid>,
    Json(input): Json<UpdateStoryInput>,
) -> AppResult<Json<Story>> {
    let service = StoryService::new(state.db);
    let story = service
        .update_story(current_user.0.user_id, story_id, input)
        .await?;
    Ok(Json(story))
}

/// Delete a story
pub async fn delete_story(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(story_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = StoryService::new(state.db);
    service
        .delete_story(current_user.0.user_id, story_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the quiz for a story
pub async fn get_quiz(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(story_id): Path<Uuid>,
) -> AppResult<Json<Vec<QuizQuestion>>> {
    let service = StoryService::new(state.db);
    let quiz = service.get_quiz(current_user.0.user_id, story_id).await?;
    Ok(Json(quiz))
}

/// Grade submitted quiz answers
pub async fn submit_quiz_answers(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(story_id): Path<Uuid>,
    Json(body): Json<QuizSubmission>,
) -> AppResult<Json<QuizGrade>> {
    let service = StoryService::new(state.db);
    let grade = service
        .grade_answers(current_user.0.user_id, story_id, body.answers)
        .await?;
    Ok(Json(grade))
}
