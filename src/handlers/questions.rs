// src/handlers/questions.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    error::{AppError, QuizError},
    models::question::CreateQuestionRequest,
    store::QuizStore,
};

/// Lists every question in the bank.
pub async fn list_questions(State(store): State<Arc<QuizStore>>) -> impl IntoResponse {
    Json(store.questions.get_all())
}

/// Retrieves a single question by ID.
pub async fn get_question(
    State(store): State<Arc<QuizStore>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let question = store
        .questions
        .get_by_id(id)
        .ok_or(QuizError::QuestionNotFound(id))?;

    Ok(Json(question))
}

/// Questions in one category, in a fresh random order on every request.
pub async fn list_by_category(
    State(store): State<Arc<QuizStore>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    Json(store.questions.get_by_category(&category))
}

/// Questions in one category at one difficulty, shuffled per request.
pub async fn list_by_category_and_difficulty(
    State(store): State<Arc<QuizStore>>,
    Path((category, difficulty)): Path<(String, String)>,
) -> impl IntoResponse {
    Json(
        store
            .questions
            .get_by_category_and_difficulty(&category, &difficulty),
    )
}

pub async fn list_categories(State(store): State<Arc<QuizStore>>) -> impl IntoResponse {
    Json(store.questions.list_categories())
}

/// Adds a question. The server assigns the id.
pub async fn create_question(
    State(store): State<Arc<QuizStore>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let stored = store.questions.insert(payload.into_question()?);
    tracing::info!(id = stored.id(), category = stored.category(), "Question added");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Deletes a question by ID. Deleting an unknown ID is not an error.
pub async fn delete_question(
    State(store): State<Arc<QuizStore>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    if store.questions.remove(id) {
        tracing::info!(id, "Question deleted");
    }
    StatusCode::NO_CONTENT
}
