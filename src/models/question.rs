// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::eq_ignore_case;
use crate::error::QuizError;

/// A multiple-choice question held by the question store.
///
/// Built only through [`Question::new`], which guarantees that
/// `correct_answer_index` points into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: i64,

    #[serde(rename = "questionText")]
    text: String,

    /// Answer choices in display order.
    options: Vec<String>,

    /// Zero-based index into `options`.
    #[serde(rename = "correctAnswer")]
    correct_answer_index: usize,

    category: String,
    difficulty: String,
}

impl Question {
    /// Minimum number of answer choices a question must offer.
    pub const MIN_OPTIONS: usize = 2;

    /// Builds an unsaved question (id `0`); the store assigns the real id on insert.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: usize,
        category: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuizError::Validation(
                "question text must not be empty".to_string(),
            ));
        }
        if options.len() < Self::MIN_OPTIONS {
            return Err(QuizError::Validation(format!(
                "a question needs at least {} options, got {}",
                Self::MIN_OPTIONS,
                options.len()
            )));
        }
        if correct_answer_index >= options.len() {
            return Err(QuizError::Validation(format!(
                "correct answer index {} is outside the {} options",
                correct_answer_index,
                options.len()
            )));
        }

        Ok(Self {
            id: 0,
            text,
            options,
            correct_answer_index,
            category: category.into(),
            difficulty: difficulty.into(),
        })
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn in_category(&self, category: &str) -> bool {
        eq_ignore_case(&self.category, category)
    }

    pub fn has_difficulty(&self, difficulty: &str) -> bool {
        eq_ignore_case(&self.difficulty, difficulty)
    }
}

/// DTO for adding a new question.
/// Any `id` sent by the client is ignored; the store always assigns one.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question_text: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    #[validate(length(min = 1, max = 20))]
    pub difficulty: String,
}

impl CreateQuestionRequest {
    pub fn into_question(self) -> Result<Question, QuizError> {
        Question::new(
            self.question_text,
            self.options,
            self.correct_answer,
            self.category,
            self.difficulty,
        )
    }
}

fn validate_options(options: &[String]) -> Result<(), validator::ValidationError> {
    if options.len() < Question::MIN_OPTIONS {
        return Err(validator::ValidationError::new("at_least_two_options"));
    }
    for opt in options {
        if opt.trim().is_empty() {
            return Err(validator::ValidationError::new("option_cannot_be_empty"));
        }
        if opt.len() > 500 {
            return Err(validator::ValidationError::new("option_too_long"));
        }
    }
    Ok(())
}
