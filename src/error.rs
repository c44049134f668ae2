// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Failures produced by the in-memory store and the scoring engine.
///
/// None of these are fatal; they are handed back to the calling layer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A question id has no entry in the store.
    #[error("question {0} not found")]
    QuestionNotFound(i64),

    /// Input rejected before it reached the core.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Fewer answers than question ids were handed to the scorer.
    #[error("{answers} answers supplied for {questions} questions")]
    OutOfRange { answers: usize, questions: usize },

    /// A percentage was requested for an attempt with no questions.
    #[error("cannot compute a percentage for an attempt with zero questions")]
    ZeroQuestions,
}

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Allows using `?` on store and scoring calls inside handlers.
impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::QuestionNotFound(_) => AppError::NotFound(err.to_string()),
            QuizError::Validation(msg) => AppError::BadRequest(msg),
            QuizError::OutOfRange { .. } | QuizError::ZeroQuestions => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

/// Malformed JSON bodies are reported as validation failures, not as axum's default 422 text.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest(errors.to_string())
    }
}
