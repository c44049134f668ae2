// src/store/mod.rs

//! Volatile, process-lifetime storage for questions and results.

pub mod ids;
pub mod questions;
pub mod results;
pub mod seed;

use std::sync::Arc;

use chrono::Utc;

use crate::error::QuizError;
use crate::models::quiz_result::{Attempt, QuizStats, Submission, SubmissionOutcome};
use crate::scoring::{self, ScoreBand};

use ids::IdAllocator;
use questions::QuestionStore;
use results::ResultStore;

/// Owns the question store, the result store and the id allocator they share.
#[derive(Debug)]
pub struct QuizStore {
    pub questions: QuestionStore,
    pub results: ResultStore,
}

impl Default for QuizStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizStore {
    /// An empty store.
    pub fn new() -> Self {
        let ids = Arc::new(IdAllocator::new());
        Self {
            questions: QuestionStore::new(Arc::clone(&ids)),
            results: ResultStore::new(ids),
        }
    }

    /// A store pre-populated with the built-in catalog.
    pub fn with_sample_questions() -> Result<Self, QuizError> {
        let store = Self::new();
        for question in seed::sample_questions()? {
            store.questions.insert(question);
        }
        Ok(store)
    }

    /// Scores a submission and records it as a new result.
    ///
    /// The score is fully computed before the result is saved; nothing is
    /// saved when the submission has no answers.
    pub fn submit(&self, submission: Submission) -> Result<SubmissionOutcome, QuizError> {
        let total = u32::try_from(submission.answers.len())
            .map_err(|_| QuizError::Validation("too many answers in one submission".to_string()))?;
        let score = scoring::score_answers(&self.questions, &submission.answers);
        let percentage = scoring::percentage(score, total)?;

        let saved = self.results.save(Attempt {
            user_name: submission.user_name,
            user_email: submission.user_email,
            score,
            total_questions: total,
            category: submission.category,
            difficulty: submission.difficulty,
            completed_at: Utc::now(),
            time_taken_seconds: submission.time_taken_seconds,
        });

        Ok(SubmissionOutcome {
            result_id: saved.id,
            score,
            total,
            percentage,
            passed: scoring::passed(percentage),
            message: ScoreBand::from_percentage(percentage).message(),
        })
    }

    pub fn stats(&self) -> QuizStats {
        let (total_questions, categories) = self.questions.catalog_summary();
        QuizStats {
            total_questions,
            total_categories: categories.len(),
            categories,
            total_attempts: self.results.len(),
        }
    }
}
