// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    config::{DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT},
    error::AppError,
    leaderboard,
    models::quiz_result::{QuizResult, ResultEntry, SubmitQuizRequest},
    store::QuizStore,
};

/// Query parameters for the leaderboard endpoints.
#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}

impl LeaderboardParams {
    fn limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
            .min(MAX_LEADERBOARD_LIMIT)
    }
}

fn entries(results: Vec<QuizResult>) -> Json<Vec<ResultEntry>> {
    Json(results.into_iter().map(ResultEntry::from).collect())
}

pub async fn welcome(State(store): State<Arc<QuizStore>>) -> impl IntoResponse {
    format!(
        "🎯 Quiz Application API is running! Total questions: {}",
        store.questions.len()
    )
}

/// Scores a quiz attempt and records it.
///
/// * Validates the payload and pairs each answer with its question id.
/// * Scores one point per correct answer.
/// * Appends the attempt to the result log.
pub async fn submit_quiz(
    State(store): State<Arc<QuizStore>>,
    payload: Result<Json<SubmitQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.inspect_err(|e| {
        tracing::warn!("Rejected malformed submission: {}", e.body_text());
    })?;

    if let Err(validation_errors) = req.validate() {
        tracing::warn!("Rejected invalid submission: {}", validation_errors);
        return Err(validation_errors.into());
    }

    let submission = req.into_submission().inspect_err(|e| {
        tracing::warn!("Rejected invalid submission: {}", e);
    })?;

    let outcome = store.submit(submission)?;
    tracing::info!(
        result_id = outcome.result_id,
        score = outcome.score,
        total = outcome.total,
        "Quiz submitted"
    );

    Ok(Json(outcome))
}

/// Highest scores across all categories.
pub async fn get_leaderboard(
    State(store): State<Arc<QuizStore>>,
    params: Result<Query<LeaderboardParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    Ok(entries(leaderboard::top_overall(
        &store.results,
        params.limit(),
    )))
}

pub async fn get_category_leaderboard(
    State(store): State<Arc<QuizStore>>,
    Path(category): Path<String>,
    params: Result<Query<LeaderboardParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    Ok(entries(leaderboard::top_by_category(
        &store.results,
        &category,
        params.limit(),
    )))
}

/// Every attempt by one user, newest first.
pub async fn get_user_results(
    State(store): State<Arc<QuizStore>>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    entries(leaderboard::by_user(&store.results, &email))
}

pub async fn list_results(State(store): State<Arc<QuizStore>>) -> impl IntoResponse {
    entries(store.results.get_all())
}

pub async fn get_stats(State(store): State<Arc<QuizStore>>) -> impl IntoResponse {
    Json(store.stats())
}
