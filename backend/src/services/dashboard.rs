//! Dashboard service
//!
//! Aggregate counts and recent activity for the parent home screen.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

/// Aggregate stats for a parent account
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub stories_count: i64,
    pub kids_count: i64,
    pub favorites_count: i64,
    pub total_reading_time: i64,
    pub recent_stories: Vec<RecentStory>,
}

/// A story row on the dashboard, joined with its kid
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RecentStory {
    pub id: Uuid,
    pub title: String,
    pub language: String,
    pub story_type: String,
    pub reading_time: i32,
    pub is_favorite: bool,
    pub kid_name: String,
    pub kid_gender: String,
    pub created_at: DateTime<Utc>,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Aggregate stats and the five most recent stories
    pub async fn get_stats(&self, user_id: Uuid) -> AppResult<DashboardStats> {
        let (stories_count, favorites_count, total_reading_time) =
            sqlx::query_as::<_, (i64, i64, i64)>(
                r#"
                SELECT COUNT(*),
                       COUNT(*) FILTER (WHERE is_favorite),
                       COALESCE(SUM(reading_time), 0)
                FROM stories
                WHERE user_id = $1
                "#,
            )
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;

        let kids_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM kid_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.db)
                .await?;

        let recent_stories = sqlx::query_as::<_, RecentStory>(
            r#"
            SELECT s.id, s.title, s.language, s.story_type, s.reading_time, s.is_favorite,
                   k.name AS kid_name, k.gender AS kid_gender, s.created_at
            FROM stories s
            JOIN kid_profiles k ON k.id = s.kid_id
            WHERE s.user_id = $1
            ORDER BY s.created_at DESC
            LIMIT 5
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(DashboardStats {
            stories_count,
            kids_count,
            favorites_count,
            total_reading_time,
            recent_stories,
        })
    }
}
