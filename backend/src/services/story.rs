//! Story service
//!
//! Story generation (prompt → model call → defensive parse → persist),
//! retrieval, favorites, pagination for the reader, and quiz access.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::external::StoryModelClient;
use crate::services::parser::{parse_model_response, ParseFallback};
use crate::services::prompt::{build_story_prompt, system_prompt, PromptParams};
use shared::models::{
    clean_story_content, grade_quiz, paginate, reading_time_minutes, word_count, KidSummary,
    PageSpread, QuizAnswer, QuizGrade, QuizKey,
};
use shared::types::{BookTheme, Gender, Language, Mood, StoryLength, StoryType};

/// Story service
#[derive(Clone)]
pub struct StoryService {
    db: PgPool,
}

/// Story row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Story {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kid_id: Uuid,
    pub title: String,
    pub content: String,
    pub language: String,
    pub story_type: String,
    pub length: String,
    pub setting: String,
    pub moral: String,
    pub mood: String,
    pub theme: String,
    pub word_count: i32,
    pub reading_time: i32,
    pub is_favorite: bool,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Quiz question row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct QuizQuestion {
    pub id: Uuid,
    pub story_id: Uuid,
    pub question: String,
    pub options: Json<Vec<String>>,
    pub correct_answer: String,
    pub order_index: i32,
}

/// Story with its kid and quiz
#[derive(Debug, Clone, Serialize)]
pub struct StoryDetail {
    #[serde(flatten)]
    pub story: Story,
    pub kid: KidSummary,
    pub quiz: Vec<QuizQuestion>,
}

/// Input for generating a story
#[derive(Debug, Deserialize)]
pub struct GenerateStoryInput {
    pub kid_id: Uuid,
    pub title: Option<String>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub story_type: StoryType,
    #[serde(default)]
    pub length: StoryLength,
    #[serde(default = "default_setting")]
    pub setting: String,
    #[serde(default = "default_moral")]
    pub moral: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub theme: BookTheme,
    #[serde(default)]
    pub include_quiz: bool,
}

fn default_setting() -> String {
    "magical_forest".to_string()
}

fn default_moral() -> String {
    "kindness".to_string()
}

/// Input for updating a story
#[derive(Debug, Deserialize)]
pub struct UpdateStoryInput {
    pub title: Option<String>,
    pub is_favorite: Option<bool>,
}

const STORY_COLUMNS: &str = "id, user_id, kid_id, title, content, language, story_type, length, \
                             setting, moral, mood, theme, word_count, reading_time, is_favorite, \
                             view_count, created_at";

impl StoryService {
    /// Create a new StoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Generate a story for a kid and persist it with its quiz
    pub async fn generate(
        &self,
        user_id: Uuid,
        input: GenerateStoryInput,
        client: &StoryModelClient,
    ) -> AppResult<StoryDetail> {
        let kid = self.get_kid_summary(user_id, input.kid_id).await?;

        let gender = Gender::parse(&kid.gender).unwrap_or(Gender::Other);
        let params = PromptParams {
            kid_name: kid.name.clone(),
            gender,
            age: kid.age,
            language: input.language,
            story_type: input.story_type,
            length: input.length,
            setting: input.setting.clone(),
            moral: input.moral.clone(),
            mood: input.mood,
            include_quiz: input.include_quiz,
        };

        tracing::info!(kid = %kid.name, language = input.language.as_str(), "Generating story");

        let response = client
            .complete(system_prompt(input.language), &build_story_prompt(&params))
            .await?;

        tracing::debug!(length = response.len(), "Model response received");

        let parsed = parse_model_response(
            &response,
            &ParseFallback {
                kid_name: &kid.name,
                requested_title: input.title.as_deref(),
                language: input.language,
                moral: &input.moral,
            },
        );

        let content = clean_story_content(&parsed.content);
        let words = word_count(&content);
        let reading_time = reading_time_minutes(words);

        // A title supplied by the parent wins over the model's title
        let title = match input.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => parsed.title.clone(),
        };

        let mut tx = self.db.begin().await?;

        let story = sqlx::query_as::<_, Story>(&format!(
            r#"
            INSERT INTO stories (user_id, kid_id, title, content, language, story_type, length,
                                 setting, moral, mood, theme, word_count, reading_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {STORY_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(input.kid_id)
        .bind(&title)
        .bind(&content)
        .bind(input.language.as_str())
        .bind(input.story_type.as_str())
        .bind(input.length.as_str())
        .bind(&input.setting)
        .bind(&parsed.moral_lesson)
        .bind(input.mood.as_str())
        .bind(input.theme.as_str())
        .bind(words as i32)
        .bind(reading_time as i32)
        .fetch_one(&mut *tx)
        .await?;

        let mut quiz = Vec::new();
        if input.include_quiz {
            for (index, question) in parsed.quiz.iter().enumerate() {
                let row = sqlx::query_as::<_, QuizQuestion>(
                    r#"
                    INSERT INTO quiz_questions (story_id, question, options, correct_answer, order_index)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id, story_id, question, options, correct_answer, order_index
                    "#,
                )
                .bind(story.id)
                .bind(&question.question)
                .bind(Json(question.options.clone()))
                .bind(&question.correct_answer)
                .bind(index as i32)
                .fetch_one(&mut *tx)
                .await?;
                quiz.push(row);
            }
        }

        tx.commit().await?;

        tracing::info!(story_id = %story.id, words, quiz_questions = quiz.len(), "Story saved");

        Ok(StoryDetail { story, kid, quiz })
    }

    /// List a parent's stories, newest first, optionally filtered by kid
    pub async fn list_stories(
        &self,
        user_id: Uuid,
        kid_id: Option<Uuid>,
    ) -> AppResult<Vec<Story>> {
        let stories = match kid_id {
            Some(kid_id) => {
                sqlx::query_as::<_, Story>(&format!(
                    "SELECT {STORY_COLUMNS} FROM stories WHERE user_id = $1 AND kid_id = $2 ORDER BY created_at DESC"
                ))
                .bind(user_id)
                .bind(kid_id)
                .fetch_all(&self.db)
                .await?
            }
            None => {
                sqlx::query_as::<_, Story>(&format!(
                    "SELECT {STORY_COLUMNS} FROM stories WHERE user_id = $1 ORDER BY created_at DESC"
                ))
                .bind(user_id)
                .fetch_all(&self.db)
                .await?
            }
        };

        Ok(stories)
    }

    /// Get a story with kid and quiz, incrementing its view counter
    pub async fn get_story(&self, user_id: Uuid, story_id: Uuid) -> AppResult<StoryDetail> {
        let story = sqlx::query_as::<_, Story>(&format!(
            r#"
            UPDATE stories SET view_count = view_count + 1
            WHERE id = $1 AND user_id = $2
            RETURNING {STORY_COLUMNS}
            "#
        ))
        .bind(story_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Story".to_string()))?;

        let kid = self.get_kid_summary(user_id, story.kid_id).await?;
        let quiz = self.quiz_for_story(story_id).await?;

        Ok(StoryDetail { story, kid, quiz })
    }

    /// Paginate a story into book spreads for the reader
    pub async fn get_story_pages(
        &self,
        user_id: Uuid,
        story_id: Uuid,
    ) -> AppResult<Vec<PageSpread>> {
        let story = sqlx::query_as::<_, Story>(&format!(
            "SELECT {STORY_COLUMNS} FROM stories WHERE id = $1 AND user_id = $2"
        ))
        .bind(story_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Story".to_string()))?;

        let language = Language::parse(&story.language).unwrap_or_default();
        Ok(paginate(&story.content, &story.title, language))
    }

    /// Update story title and/or favorite flag
    pub async fn update_story(
        &self,
        user_id: Uuid,
        story_id: Uuid,
        input: UpdateStoryInput,
    ) -> AppResult<Story> {
        if let Some(ref title) = input.title {
            if title.trim().is_empty() {
                return Err(AppError::Validation {
                    field: "title".to_string(),
                    message: "Title cannot be empty".to_string(),
                    message_bn: "শিরোনাম খালি হতে পারে না".to_string(),
                });
            }
        }

        let story = sqlx::query_as::<_, Story>(&format!(
            r#"
            UPDATE stories
            SET title = COALESCE($1, title),
                is_favorite = COALESCE($2, is_favorite)
            WHERE id = $3 AND user_id = $4
            RETURNING {STORY_COLUMNS}
            "#
        ))
        .bind(input.title.as_ref().map(|t| t.trim().to_string()))
        .bind(input.is_favorite)
        .bind(story_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Story".to_string()))?;

        Ok(story)
    }

    /// Delete a story (quiz questions and shares cascade)
    pub async fn delete_story(&self, user_id: Uuid, story_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1 AND user_id = $2")
            .bind(story_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Story".to_string()));
        }

        Ok(())
    }

    /// Get the quiz for a story the parent owns
    pub async fn get_quiz(&self, user_id: Uuid, story_id: Uuid) -> AppResult<Vec<QuizQuestion>> {
        self.assert_story_owned(user_id, story_id).await?;
        self.quiz_for_story(story_id).await
    }

    /// Grade a submitted answer sheet against the stored quiz
    pub async fn grade_answers(
        &self,
        user_id: Uuid,
        story_id: Uuid,
        answers: Vec<QuizAnswer>,
    ) -> AppResult<QuizGrade> {
        let questions = self.get_quiz(user_id, story_id).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound("Quiz".to_string()));
        }

        let keys: Vec<QuizKey> = questions
            .into_iter()
            .map(|q| QuizKey {
                question_id: q.id,
                correct_answer: q.correct_answer,
            })
            .collect();

        Ok(grade_quiz(&keys, &answers))
    }

    pub(crate) async fn quiz_for_story(&self, story_id: Uuid) -> AppResult<Vec<QuizQuestion>> {
        let quiz = sqlx::query_as::<_, QuizQuestion>(
            r#"
            SELECT id, story_id, question, options, correct_answer, order_index
            FROM quiz_questions
            WHERE story_id = $1
            ORDER BY order_index ASC
            "#,
        )
        .bind(story_id)
        .fetch_all(&self.db)
        .await?;

        Ok(quiz)
    }

    pub(crate) async fn get_kid_summary(
        &self,
        user_id: Uuid,
        kid_id: Uuid,
    ) -> AppResult<KidSummary> {
        let kid = sqlx::query_as::<_, (Uuid, String, i32, String)>(
            "SELECT id, name, age, gender FROM kid_profiles WHERE id = $1 AND user_id = $2",
        )
        .bind(kid_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Kid profile".to_string()))?;

        Ok(KidSummary {
            id: kid.0,
            name: kid.1,
            age: kid.2,
            gender: kid.3,
        })
    }

    async fn assert_story_owned(&self, user_id: Uuid, story_id: Uuid) -> AppResult<()> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM stories WHERE id = $1 AND user_id = $2",
        )
        .bind(story_id)
        .bind(user_id)
        .fetch_one(&self.db)
        .await?;

        if exists == 0 {
            return Err(AppError::NotFound("Story".to_string()));
        }

        Ok(())
    }
}
