// src/scoring.rs

//! Score calculation for submitted attempts.
//!
//! Scoring reads the answer key from [`QuestionStore`] once and is otherwise
//! pure: the same store contents and the same answers always give the same score.

use std::collections::HashMap;

use crate::config::PASSING_PERCENTAGE;
use crate::error::QuizError;
use crate::models::quiz_result::AnswerPair;
use crate::store::questions::QuestionStore;

/// Counts correct answers where `user_answers[i]` answers `question_ids[i]`.
///
/// Unknown question ids score 0. Extra answers beyond `question_ids` are
/// ignored; fewer answers than ids is [`QuizError::OutOfRange`].
pub fn calculate_score(
    questions: &QuestionStore,
    user_answers: &[i64],
    question_ids: &[i64],
) -> Result<u32, QuizError> {
    if user_answers.len() < question_ids.len() {
        return Err(QuizError::OutOfRange {
            answers: user_answers.len(),
            questions: question_ids.len(),
        });
    }

    let answers: Vec<AnswerPair> = question_ids
        .iter()
        .zip(user_answers)
        .map(|(&question_id, &answer_index)| AnswerPair {
            question_id,
            answer_index,
        })
        .collect();

    Ok(score_answers(questions, &answers))
}

/// Counts correct answers in an already-paired submission.
pub fn score_answers(questions: &QuestionStore, answers: &[AnswerPair]) -> u32 {
    let key = questions.answer_key(answers.iter().map(|a| a.question_id));
    score_against_key(&key, answers)
}

fn score_against_key(key: &HashMap<i64, usize>, answers: &[AnswerPair]) -> u32 {
    let correct = answers
        .iter()
        .filter(|a| {
            key.get(&a.question_id).is_some_and(|&correct| {
                usize::try_from(a.answer_index).is_ok_and(|given| given == correct)
            })
        })
        .count();
    u32::try_from(correct).unwrap_or(u32::MAX)
}

/// `score * 100 / total`, refusing to divide by zero.
pub fn percentage(score: u32, total: u32) -> Result<f64, QuizError> {
    if total == 0 {
        return Err(QuizError::ZeroQuestions);
    }
    Ok(f64::from(score) * 100.0 / f64::from(total))
}

pub fn passed(percentage: f64) -> bool {
    percentage >= PASSING_PERCENTAGE
}

/// Feedback tier for a finished attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Outstanding,
    Great,
    Good,
    KeepPracticing,
}

impl ScoreBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            ScoreBand::Outstanding
        } else if percentage >= 70.0 {
            ScoreBand::Great
        } else if percentage >= PASSING_PERCENTAGE {
            ScoreBand::Good
        } else {
            ScoreBand::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Outstanding => "Outstanding! 🎉",
            ScoreBand::Great => "Great job! 👏",
            ScoreBand::Good => "Good effort! 👍",
            ScoreBand::KeepPracticing => "Keep practicing! 📚",
        }
    }
}
