// src/leaderboard.rs

//! Ranked, read-only views over the result store.

use std::cmp::Ordering;

use crate::models::eq_ignore_case;
use crate::models::quiz_result::QuizResult;
use crate::store::results::ResultStore;

/// Best attempts overall: highest score first, newer attempt first on a tie.
pub fn top_overall(results: &ResultStore, limit: usize) -> Vec<QuizResult> {
    ranked(results.get_all(), limit)
}

/// Same ordering as [`top_overall`], restricted to one category (case-insensitive).
pub fn top_by_category(results: &ResultStore, category: &str, limit: usize) -> Vec<QuizResult> {
    ranked(
        results.filtered(|r| eq_ignore_case(&r.category, category)),
        limit,
    )
}

/// A user's full history, newest first. Not truncated.
pub fn by_user(results: &ResultStore, user_email: &str) -> Vec<QuizResult> {
    let mut history = results.filtered(|r| eq_ignore_case(&r.user_email, user_email));
    history.sort_by(|a, b| {
        b.completed_at
            .cmp(&a.completed_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    history
}

fn ranked(mut results: Vec<QuizResult>, limit: usize) -> Vec<QuizResult> {
    results.sort_by(rank_order);
    results.truncate(limit);
    results
}

/// Score descending, then `completed_at` descending, then id descending so
/// the order is total even for identical timestamps.
fn rank_order(a: &QuizResult, b: &QuizResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.completed_at.cmp(&a.completed_at))
        .then_with(|| b.id.cmp(&a.id))
}
