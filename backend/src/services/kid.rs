//! Kid profile service
//!
//! CRUD over kid profiles, always scoped to the owning parent account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::validation::{validate_gender, validate_interests, validate_kid_age, validate_name};

/// Kid profile service
#[derive(Clone)]
pub struct KidService {
    db: PgPool,
}

/// Kid profile row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct KidProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub interests: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a kid profile
#[derive(Debug, Deserialize)]
pub struct CreateKidInput {
    pub name: String,
    pub age: i32,
    pub gender: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Input for updating a kid profile
#[derive(Debug, Deserialize)]
pub struct UpdateKidInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub interests: Option<Vec<String>>,
}

const KID_COLUMNS: &str = "id, user_id, name, age, gender, interests, created_at, updated_at";

fn duplicate_name_conflict() -> AppError {
    AppError::Conflict {
        resource: "kid_profile".to_string(),
        message: "A kid profile with this name already exists".to_string(),
        message_bn: "এই নামে একটি প্রোফাইল আগে থেকেই আছে".to_string(),
    }
}

impl KidService {
    /// Create a new KidService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all kid profiles for a parent, newest first
    pub async fn list_kids(&self, user_id: Uuid) -> AppResult<Vec<KidProfile>> {
        let kids = sqlx::query_as::<_, KidProfile>(&format!(
            "SELECT {KID_COLUMNS} FROM kid_profiles WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        Ok(kids)
    }

    /// Get one kid profile owned by the parent
    pub async fn get_kid(&self, user_id: Uuid, kid_id: Uuid) -> AppResult<KidProfile> {
        sqlx::query_as::<_, KidProfile>(&format!(
            "SELECT {KID_COLUMNS} FROM kid_profiles WHERE id = $1 AND user_id = $2"
        ))
        .bind(kid_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Kid profile".to_string()))
    }

    /// Create a new kid profile
    pub async fn create_kid(&self, user_id: Uuid, input: CreateKidInput) -> AppResult<KidProfile> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
            message_bn: "নাম সঠিক নয়".to_string(),
        })?;

        validate_kid_age(input.age).map_err(|msg| AppError::Validation {
            field: "age".to_string(),
            message: msg.to_string(),
            message_bn: "বয়স ১ থেকে ১৫ এর মধ্যে হতে হবে".to_string(),
        })?;

        let gender = validate_gender(&input.gender).map_err(|msg| AppError::Validation {
            field: "gender".to_string(),
            message: msg.to_string(),
            message_bn: "লিঙ্গ সঠিক নয়".to_string(),
        })?;

        validate_interests(&input.interests).map_err(|msg| AppError::Validation {
            field: "interests".to_string(),
            message: msg.to_string(),
            message_bn: "পছন্দের তালিকা সঠিক নয়".to_string(),
        })?;

        // Check for duplicate name under the same parent
        let duplicate = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM kid_profiles WHERE user_id = $1 AND LOWER(name) = LOWER($2)",
        )
        .bind(user_id)
        .bind(input.name.trim())
        .fetch_one(&self.db)
        .await?;

        if duplicate > 0 {
            return Err(duplicate_name_conflict());
        }

        let kid = sqlx::query_as::<_, KidProfile>(&format!(
            r#"
            INSERT INTO kid_profiles (user_id, name, age, gender, interests)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {KID_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(input.name.trim())
        .bind(input.age)
        .bind(gender.as_str())
        .bind(Json(input.interests))
        .fetch_one(&self.db)
        .await
        .map_err(|e| AppError::or_conflict(e, duplicate_name_conflict()))?;

        Ok(kid)
    }

    /// Update a kid profile
    pub async fn update_kid(
        &self,
        user_id: Uuid,
        kid_id: Uuid,
        input: UpdateKidInput,
    ) -> AppResult<KidProfile> {
        let existing = self.get_kid(user_id, kid_id).await?;

        if let Some(ref name) = input.name {
            validate_name(name).map_err(|msg| AppError::Validation {
                field: "name".to_string(),
                message: msg.to_string(),
                message_bn: "নাম সঠিক নয়".to_string(),
            })?;

            let duplicate = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM kid_profiles WHERE user_id = $1 AND LOWER(name) = LOWER($2) AND id != $3",
            )
            .bind(user_id)
            .bind(name.trim())
            .bind(kid_id)
            .fetch_one(&self.db)
            .await?;

            if duplicate > 0 {
                return Err(duplicate_name_conflict());
            }
        }

        if let Some(age) = input.age {
            validate_kid_age(age).map_err(|msg| AppError::Validation {
                field: "age".to_string(),
                message: msg.to_string(),
                message_bn: "বয়স ১ থেকে ১৫ এর মধ্যে হতে হবে".to_string(),
            })?;
        }

        let gender = match input.gender {
            Some(ref g) => validate_gender(g)
                .map_err(|msg| AppError::Validation {
                    field: "gender".to_string(),
                    message: msg.to_string(),
                    message_bn: "লিঙ্গ সঠিক নয়".to_string(),
                })?
                .as_str()
                .to_string(),
            None => existing.gender.clone(),
        };

        if let Some(ref interests) = input.interests {
            validate_interests(interests).map_err(|msg| AppError::Validation {
                field: "interests".to_string(),
                message: msg.to_string(),
                message_bn: "পছন্দের তালিকা সঠিক নয়".to_string(),
            })?;
        }

        let name = input
            .name
            .map(|n| n.trim().to_string())
            .unwrap_or(existing.name);
        let age = input.age.unwrap_or(existing.age);
        let interests = input.interests.unwrap_or_else(|| existing.interests.0.clone());

        let kid = sqlx::query_as::<_, KidProfile>(&format!(
            r#"
            UPDATE kid_profiles
            SET name = $1, age = $2, gender = $3, interests = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING {KID_COLUMNS}
            "#
        ))
        .bind(&name)
        .bind(age)
        .bind(&gender)
        .bind(Json(interests))
        .bind(kid_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| AppError::or_conflict(e, duplicate_name_conflict()))?;

        Ok(kid)
    }

    /// Delete a kid profile (stories and quizzes cascade)
    pub async fn delete_kid(&self, user_id: Uuid, kid_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM kid_profiles WHERE id = $1 AND user_id = $2")
            .bind(kid_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Kid profile".to_string()));
        }

        Ok(())
    }
}
