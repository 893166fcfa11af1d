//! Route definitions for the Magical Tales API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Public shared-story route (unauthenticated - for share links)
        .route("/share/:token", get(handlers::get_shared_story))
        // Protected routes - kid profiles
        .nest("/kids", kid_routes(state.clone()))
        // Protected routes - stories, reader, quizzes, sharing
        .nest("/stories", story_routes(state.clone()))
        // Protected routes - dashboard
        .nest("/dashboard", dashboard_routes(state))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
}

/// Kid profile routes (protected)
fn kid_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_kids).post(handlers::create_kid))
        .route(
            "/:kid_id",
            get(handlers::get_kid)
                .put(handlers::update_kid)
                .delete(handlers::delete_kid),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Story routes (protected)
fn story_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stories))
        .route("/generate", post(handlers::generate_story))
        .route(
            "/:story_id",
            get(handlers::get_story)
                .put(handlers::update_story)
                .delete(handlers::delete_story),
        )
        .route("/:story_id/pages", get(handlers::get_story_pages))
        .route("/:story_id/quiz", get(handlers::get_quiz))
        .route("/:story_id/quiz/answers", post(handlers::submit_quiz_answers))
        .route("/:story_id/share", post(handlers::create_share))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Dashboard routes (protected)
fn dashboard_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::get_dashboard_stats))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
