// src/store/results.rs

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use super::ids::{IdAllocator, IdSpace};
use crate::models::quiz_result::{Attempt, QuizResult};

/// Append-only log of saved attempts. There is no update or delete.
#[derive(Debug)]
pub struct ResultStore {
    ids: Arc<IdAllocator>,
    results: RwLock<Vec<QuizResult>>,
}

impl ResultStore {
    pub fn new(ids: Arc<IdAllocator>) -> Self {
        Self {
            ids,
            results: RwLock::new(Vec::new()),
        }
    }

    /// Assigns an id and appends. The id is taken under the write lock, so
    /// the log stays in id order.
    pub fn save(&self, attempt: Attempt) -> QuizResult {
        let mut results = self.results.write().unwrap_or_else(PoisonError::into_inner);
        let stored = attempt.into_result(self.ids.next(IdSpace::Result));
        results.push(stored.clone());
        stored
    }

    /// Every saved result, oldest first.
    pub fn get_all(&self) -> Vec<QuizResult> {
        self.read().clone()
    }

    /// Copies out only the results accepted by `keep`.
    pub fn filtered<F>(&self, keep: F) -> Vec<QuizResult>
    where
        F: Fn(&QuizResult) -> bool,
    {
        self.read().iter().filter(|r| keep(r)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<QuizResult>> {
        self.results.read().unwrap_or_else(PoisonError::into_inner)
    }
}
