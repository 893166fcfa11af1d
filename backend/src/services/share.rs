//! Story sharing service
//!
//! Parents mint share links for stories they own. The link carries a random
//! token; only its digest is stored, so a leaked database dump cannot be
//! replayed into working links.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::auth::AuthService;
use crate::services::story::{QuizQuestion, Story, StoryService};
use shared::models::{paginate, KidSummary, PageSpread};
use shared::types::Language;

/// Story sharing service
#[derive(Clone)]
pub struct ShareService {
    db: PgPool,
}

/// A minted share link
#[derive(Debug, Serialize)]
pub struct ShareLink {
    pub story_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Everything a visitor needs to read a shared story
#[derive(Debug, Serialize)]
pub struct SharedStory {
    pub title: String,
    pub content: String,
    pub language: String,
    pub theme: String,
    pub moral: String,
    pub kid_name: String,
    pub word_count: i32,
    pub reading_time: i32,
    pub pages: Vec<PageSpread>,
    pub quiz: Vec<SharedQuizQuestion>,
}

/// Quiz question as shown to a share visitor, answer key included so the
/// public reader can grade locally
#[derive(Debug, Serialize)]
pub struct SharedQuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl ShareService {
    /// Create a new ShareService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a share link for a story, or return a fresh token over the
    /// existing share record
    pub async fn create_share(&self, user_id: Uuid, story_id: Uuid) -> AppResult<ShareLink> {
        let owned = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM stories WHERE id = $1 AND user_id = $2",
        )
        .bind(story_id)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        if owned == 0 {
            return Err(AppError::NotFound("Story".to_string()));
        }

        let token = Uuid::new_v4().simple().to_string();
        let token_hash = AuthService::hash_token(&token);

        // One share row per story; re-sharing rotates the token
        let created_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            INSERT INTO story_shares (story_id, user_id, token_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (story_id)
            DO UPDATE SET token_hash = EXCLUDED.token_hash
            RETURNING created_at
            "#,
        )
        .bind(story_id)
        .bind(user_id)
        .bind(&token_hash)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(story_id = %story_id, "Share link created");

        Ok(ShareLink {
            story_id,
            token,
            created_at,
        })
    }

    /// Resolve a public share token into a readable story
    pub async fn resolve_share(&self, token: &str) -> AppResult<SharedStory> {
        let token_hash = AuthService::hash_token(token);

        let share = sqlx::query_as::<_, (Uuid, Uuid)>(
            "SELECT id, story_id FROM story_shares WHERE token_hash = $1",
        )
        .bind(&token_hash)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Shared story".to_string()))?;

        let (share_id, story_id) = share;

        sqlx::query("UPDATE story_shares SET view_count = view_count + 1 WHERE id = $1")
            .bind(share_id)
            .execute(&self.db)
            .await?;

        let story = sqlx::query_as::<_, Story>(
            r#"
            SELECT id, user_id, kid_id, title, content, language, story_type, length,
                   setting, moral, mood, theme, word_count, reading_time, is_favorite,
                   view_count, created_at
            FROM stories WHERE id = $1
            "#,
        )
        .bind(story_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Shared story".to_string()))?;

        let kid = sqlx::query_as::<_, (Uuid, String, i32, String)>(
            "SELECT id, name, age, gender FROM kid_profiles WHERE id = $1",
        )
        .bind(story.kid_id)
        .fetch_optional(&self.db)
        .await?
        .map(|row| KidSummary {
            id: row.0,
            name: row.1,
            age: row.2,
            gender: row.3,
        });

        let quiz = StoryService::new(self.db.clone())
            .quiz_for_story(story_id)
            .await?
            .into_iter()
            .map(|q: QuizQuestion| SharedQuizQuestion {
                question: q.question,
                options: q.options.0,
                correct_answer: q.correct_answer,
            })
            .collect();

        let language = Language::parse(&story.language).unwrap_or_default();
        let pages = paginate(&story.content, &story.title, language);

        Ok(SharedStory {
            title: story.title,
            content: story.content,
            language: story.language,
            theme: story.theme,
            moral: story.moral,
            kid_name: kid.map(|k| k.name).unwrap_or_default(),
            word_count: story.word_count,
            reading_time: story.reading_time,
            pages,
            quiz,
        })
    }
}
