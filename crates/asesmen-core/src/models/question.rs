use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answer;
use super::category::Category;

/// A single yes/no screening item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub text: String,
    pub category: Category,
    pub answer: Answer,
}

impl Question {
    /// Create an unanswered question.
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
            answer: Answer::Unanswered,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_answered()
    }
}
