use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::generate_catalog;
use crate::error::AssessmentError;
use crate::models::answer::Answer;
use crate::models::question::Question;
use crate::scoring::{self, CategoryScores};

/// Answered versus total question count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

/// Answer state for one assessment attempt.
///
/// A session owns its own copy of the catalog; answers are never shared
/// between sessions. Multi-threaded hosts should keep one session per
/// user behind a single lock.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Session {
    id: Uuid,
    questions: Vec<Question>,
}

impl Session {
    /// Start a session over a fresh, unanswered catalog.
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            questions: generate_catalog(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Questions in catalog order, with their current answers.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Set the answer for the question at `index`, overwriting any earlier
    /// answer. Only that question changes.
    pub fn record_answer(&mut self, index: usize, value: bool) -> Result<(), AssessmentError> {
        let total = self.questions.len();
        let question = self
            .questions
            .get_mut(index)
            .ok_or(AssessmentError::IndexOutOfRange { index, total })?;
        question.answer = Answer::from(value);
        Ok(())
    }

    /// Value-style variant of [`Session::record_answer`].
    pub fn with_answer(mut self, index: usize, value: bool) -> Result<Self, AssessmentError> {
        self.record_answer(index, value)?;
        Ok(self)
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.answered_count(),
            total: self.total(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.total()
    }

    /// Index of the first question still unanswered, if any.
    pub fn first_unanswered(&self) -> Option<usize> {
        self.questions.iter().position(|q| !q.is_answered())
    }

    /// Per-category scores for the current answers. Callable at any time;
    /// unanswered questions count as "no".
    pub fn score(&self) -> CategoryScores {
        scoring::score(self)
    }
}
