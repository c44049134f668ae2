// src/store/questions.rs

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::Rng;
use rand::seq::SliceRandom;

use super::ids::{IdAllocator, IdSpace};
use crate::models::question::Question;

/// Owns every question, keyed by id.
///
/// Writers take the write lock for the whole insert/remove, readers copy what
/// they need out under the read lock, so every read is a point-in-time snapshot.
#[derive(Debug)]
pub struct QuestionStore {
    ids: Arc<IdAllocator>,
    questions: RwLock<BTreeMap<i64, Question>>,
}

impl QuestionStore {
    pub fn new(ids: Arc<IdAllocator>) -> Self {
        Self {
            ids,
            questions: RwLock::new(BTreeMap::new()),
        }
    }

    /// Stores `question` under a freshly allocated id and returns the stored copy.
    pub fn insert(&self, question: Question) -> Question {
        let mut questions = self.write();
        let id = self.ids.next(IdSpace::Question);
        let stored = question.with_id(id);
        questions.insert(id, stored.clone());
        stored
    }

    /// Deletes the question if present. Returns whether anything was removed.
    pub fn remove(&self, id: i64) -> bool {
        self.write().remove(&id).is_some()
    }

    pub fn get_by_id(&self, id: i64) -> Option<Question> {
        self.read().get(&id).cloned()
    }

    /// All questions in id order.
    pub fn get_all(&self) -> Vec<Question> {
        self.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Questions in `category` (case-insensitive), freshly shuffled on every call.
    pub fn get_by_category(&self, category: &str) -> Vec<Question> {
        self.get_by_category_with_rng(category, &mut rand::thread_rng())
    }

    pub fn get_by_category_with_rng<R: Rng + ?Sized>(
        &self,
        category: &str,
        rng: &mut R,
    ) -> Vec<Question> {
        self.shuffled(|q| q.in_category(category), rng)
    }

    /// Questions matching both `category` and `difficulty` (case-insensitive), shuffled per call.
    pub fn get_by_category_and_difficulty(&self, category: &str, difficulty: &str) -> Vec<Question> {
        self.get_by_category_and_difficulty_with_rng(category, difficulty, &mut rand::thread_rng())
    }

    pub fn get_by_category_and_difficulty_with_rng<R: Rng + ?Sized>(
        &self,
        category: &str,
        difficulty: &str,
        rng: &mut R,
    ) -> Vec<Question> {
        self.shuffled(
            |q| q.in_category(category) && q.has_difficulty(difficulty),
            rng,
        )
    }

    /// Distinct category values, sorted ascending.
    pub fn list_categories(&self) -> Vec<String> {
        distinct_categories(&self.read())
    }

    /// Question count and distinct categories, taken under one read lock.
    pub fn catalog_summary(&self) -> (usize, Vec<String>) {
        let questions = self.read();
        (questions.len(), distinct_categories(&questions))
    }

    /// Correct answer index for each requested id that exists, read from one snapshot.
    pub fn answer_key<I>(&self, ids: I) -> HashMap<i64, usize>
    where
        I: IntoIterator<Item = i64>,
    {
        let questions = self.read();
        ids.into_iter()
            .filter_map(|id| questions.get(&id).map(|q| (id, q.correct_answer_index())))
            .collect()
    }

    fn shuffled<F, R>(&self, keep: F, rng: &mut R) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
        R: Rng + ?Sized,
    {
        let mut picked: Vec<Question> = self.read().values().filter(|q| keep(q)).cloned().collect();
        picked.shuffle(rng);
        picked
    }

    // A panic can only happen outside the map mutation itself, so a poisoned
    // lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<i64, Question>> {
        self.questions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<i64, Question>> {
        self.questions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn distinct_categories(questions: &BTreeMap<i64, Question>) -> Vec<String> {
    questions
        .values()
        .map(|q| q.category().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
