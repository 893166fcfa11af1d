//! Error handling for the Magical Tales backend
//!
//! Provides consistent error responses in English and Bengali

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        message_bn: String,
    },

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_bn: String,
    },

    #[error("Conflict: {message}")]
    Conflict {
        resource: String,
        message: String,
        message_bn: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // External service errors
    #[error("Story generation error: {0}")]
    AiGenerationError(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Map a unique-constraint violation from the database to the given
    /// conflict, leaving other database errors untouched. Pre-insert
    /// duplicate checks race with concurrent writers; the constraint is
    /// the authority.
    pub fn or_conflict(err: sqlx::Error, conflict: AppError) -> AppError {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => conflict,
            other => AppError::DatabaseError(other),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_bn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message_en: "Invalid email or password".to_string(),
                    message_bn: "ইমেইল বা পাসওয়ার্ড সঠিক নয়".to_string(),
                    field: None,
                },
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "INVALID_TOKEN".to_string(),
                    message_en: "Invalid token".to_string(),
                    message_bn: "টোকেন সঠিক নয়".to_string(),
                    field: None,
                },
            ),
            AppError::Unauthorized { message, message_bn } => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail {
                    code: "UNAUTHORIZED".to_string(),
                    message_en: message.clone(),
                    message_bn: message_bn.clone(),
                    field: None,
                },
            ),
            AppError::Validation { field, message, message_bn } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_bn: message_bn.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::Conflict { resource, message, message_bn } => (
                StatusCode::CONFLICT,
                ErrorDetail {
                    code: "CONFLICT".to_string(),
                    message_en: message.clone(),
                    message_bn: message_bn.clone(),
                    field: Some(resource.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_bn: format!("{} খুঁজে পাওয়া যায়নি", resource),
                    field: None,
                },
            ),
            AppError::AiGenerationError(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "AI_GENERATION_ERROR".to_string(),
                    message_en: format!("Story generation failed: {}", msg),
                    message_bn: format!("গল্প তৈরি করা যায়নি: {}", msg),
                    field: None,
                },
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message_en: "A database error occurred".to_string(),
                    message_bn: "ডাটাবেজে ত্রুটি হয়েছে".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_bn: "সার্ভারে ত্রুটি হয়েছে".to_string(),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_bn: "সার্ভারে ত্রুটি হয়েছে".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict() -> AppError {
        AppError::Conflict {
            resource: "user".to_string(),
            message: "An account with this email already exists".to_string(),
            message_bn: "এই ইমেইল দিয়ে একটি অ্যাকাউন্ট আগে থেকেই আছে".to_string(),
        }
    }

    #[test]
    fn test_non_unique_db_errors_pass_through() {
        let mapped = AppError::or_conflict(sqlx::Error::RowNotFound, conflict());
        assert!(matches!(mapped, AppError::DatabaseError(_)));
    }

    #[test]
    fn test_pool_errors_pass_through() {
        let mapped = AppError::or_conflict(sqlx::Error::PoolClosed, conflict());
        assert!(matches!(mapped, AppError::DatabaseError(_)));
    }
}
