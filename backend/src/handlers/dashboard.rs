//! HTTP handlers for the parent dashboard

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::dashboard::{DashboardService, DashboardStats};
use crate::AppState;

/// Aggregate stats for the authenticated parent
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<DashboardStats>> {
    let service = DashboardService::new(state.db);
    let stats = service.get_stats(current_user.0.user_id).await?;
    Ok(Json(stats))
}
