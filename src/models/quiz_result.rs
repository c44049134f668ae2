// src/models/quiz_result.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::QuizError;
use crate::scoring;

/// A completed attempt as stored in the result store.
/// Immutable once saved; the store hands out copies only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: i64,
    pub user_name: String,
    pub user_email: String,
    pub score: u32,
    pub total_questions: u32,
    pub category: String,
    pub difficulty: String,
    pub completed_at: DateTime<Utc>,
    #[serde(rename = "timeTaken")]
    pub time_taken_seconds: i64,
}

impl QuizResult {
    pub fn percentage(&self) -> Result<f64, QuizError> {
        scoring::percentage(self.score, self.total_questions)
    }
}

/// An attempt that has been scored but not yet saved (no id).
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub user_name: String,
    pub user_email: String,
    pub score: u32,
    pub total_questions: u32,
    pub category: String,
    pub difficulty: String,
    pub completed_at: DateTime<Utc>,
    pub time_taken_seconds: i64,
}

impl Attempt {
    pub(crate) fn into_result(self, id: i64) -> QuizResult {
        QuizResult {
            id,
            user_name: self.user_name,
            user_email: self.user_email,
            score: self.score,
            total_questions: self.total_questions,
            category: self.category,
            difficulty: self.difficulty,
            completed_at: self.completed_at,
            time_taken_seconds: self.time_taken_seconds,
        }
    }
}

/// One submitted answer, paired with the question it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerPair {
    pub question_id: i64,
    pub answer_index: i64,
}

/// A quiz submission after boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub user_name: String,
    pub user_email: String,
    pub category: String,
    pub difficulty: String,
    pub time_taken_seconds: i64,
    pub answers: Vec<AnswerPair>,
}

/// What the caller gets back after a submission is scored and saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    pub result_id: i64,
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub passed: bool,
    pub message: &'static str,
}

/// DTO for submitting a quiz attempt.
///
/// `user_answers[i]` answers `question_ids[i]`; the two lists are paired up
/// by [`SubmitQuizRequest::into_submission`] and must have equal length.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, max = 100, message = "userName must be between 1 and 100 characters."))]
    pub user_name: String,
    #[validate(length(min = 1, max = 254, message = "userEmail must be between 1 and 254 characters."))]
    pub user_email: String,
    pub category: String,
    pub difficulty: String,
    #[serde(rename = "timeTaken")]
    pub time_taken_seconds: i64,
    pub user_answers: Vec<i64>,
    #[validate(length(min = 1, message = "questionIds must not be empty."))]
    pub question_ids: Vec<i64>,
}

impl SubmitQuizRequest {
    pub fn into_submission(self) -> Result<Submission, QuizError> {
        if self.user_answers.len() != self.question_ids.len() {
            return Err(QuizError::Validation(format!(
                "userAnswers has {} entries but questionIds has {}",
                self.user_answers.len(),
                self.question_ids.len()
            )));
        }

        let answers = self
            .question_ids
            .into_iter()
            .zip(self.user_answers)
            .map(|(question_id, answer_index)| AnswerPair {
                question_id,
                answer_index,
            })
            .collect();

        Ok(Submission {
            user_name: self.user_name,
            user_email: self.user_email,
            category: self.category,
            difficulty: self.difficulty,
            time_taken_seconds: self.time_taken_seconds,
            answers,
        })
    }
}

/// A stored result plus its derived percentage, as listed by the leaderboard endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    #[serde(flatten)]
    pub result: QuizResult,
    /// `None` when the attempt had no questions.
    pub percentage: Option<f64>,
}

impl From<QuizResult> for ResultEntry {
    fn from(result: QuizResult) -> Self {
        let percentage = result.percentage().ok();
        Self { result, percentage }
    }
}

/// Aggregate counters for the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStats {
    pub total_questions: usize,
    pub total_categories: usize,
    pub categories: Vec<String>,
    pub total_attempts: usize,
}
