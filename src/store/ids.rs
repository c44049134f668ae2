// src/store/ids.rs

use std::sync::atomic::{AtomicI64, Ordering};

/// The independent id sequences handed out by [`IdAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSpace {
    Question,
    Result,
}

/// Issues strictly increasing ids, starting at 1, for each [`IdSpace`].
///
/// Ids are never reused, even after the entity they were issued for is deleted.
/// `next` is a single atomic increment, so concurrent callers always observe
/// distinct values.
#[derive(Debug)]
pub struct IdAllocator {
    questions: AtomicI64,
    results: AtomicI64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            questions: AtomicI64::new(1),
            results: AtomicI64::new(1),
        }
    }

    pub fn next(&self, space: IdSpace) -> i64 {
        self.counter(space).fetch_add(1, Ordering::SeqCst)
    }

    fn counter(&self, space: IdSpace) -> &AtomicI64 {
        match space {
            IdSpace::Question => &self.questions,
            IdSpace::Result => &self.results,
        }
    }
}
