use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::catalog::CATEGORY_SIZE;
use crate::models::answer::Answer;
use crate::models::category::Category;
use crate::models::question::Question;
use crate::session::Session;

/// Highest possible raw count for one category.
pub const MAX_RAW_COUNT: u32 = CATEGORY_SIZE as u32;

/// Scale a raw count to a 0–100 score. Integer division, truncating.
///
/// Every percentage shown anywhere goes through this function. Callers must
/// have checked `raw_count <= MAX_RAW_COUNT`; the public entry point is
/// [`ScoreResult::new`].
pub(crate) fn percent_of(raw_count: u32) -> u32 {
    raw_count * 100 / MAX_RAW_COUNT
}

/// Score for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub category: Category,
    /// Number of "yes" answers in the category (0–18).
    pub raw_count: u32,
    /// `raw_count * 100 / 18`, truncated.
    pub percent: u32,
}

impl ScoreResult {
    /// Score a raw count, rejecting counts above the category size.
    pub fn new(category: Category, raw_count: u32) -> Result<Self, ValidationError> {
        validate_raw_count(category, raw_count)?;
        Ok(Self::from_raw(category, raw_count))
    }

    /// Counts from a session are bounded by the catalog, and routes are
    /// validated before reaching here.
    pub(crate) fn from_raw(category: Category, raw_count: u32) -> Self {
        Self {
            category,
            raw_count,
            percent: percent_of(raw_count),
        }
    }
}

/// Scores for all three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScores {
    pub autism: ScoreResult,
    pub adhd: ScoreResult,
    pub intellectual_disability: ScoreResult,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> &ScoreResult {
        match category {
            Category::Autism => &self.autism,
            Category::Adhd => &self.adhd,
            Category::IntellectualDisability => &self.intellectual_disability,
        }
    }

    /// Results in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreResult> {
        [&self.autism, &self.adhd, &self.intellectual_disability].into_iter()
    }
}

/// Count the "yes" answers in `category`.
pub fn raw_count(questions: &[Question], category: Category) -> u32 {
    questions
        .iter()
        .filter(|q| q.category == category && q.answer == Answer::Yes)
        .count() as u32
}

/// Reduce a session to per-category scores. Never fails and has no
/// precondition on completeness.
pub fn score(session: &Session) -> CategoryScores {
    let questions = session.questions();
    let result = |category| ScoreResult::from_raw(category, raw_count(questions, category));

    CategoryScores {
        autism: result(Category::Autism),
        adhd: result(Category::Adhd),
        intellectual_disability: result(Category::IntellectualDisability),
    }
}

/// A raw count that falls outside `0..=18`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub category: Category,
    pub value: u32,
    pub max: u32,
    pub message: String,
}

/// Check a raw count against the fixed category size.
pub fn validate_raw_count(category: Category, value: u32) -> Result<(), ValidationError> {
    if value <= MAX_RAW_COUNT {
        return Ok(());
    }
    Err(ValidationError {
        category,
        value,
        max: MAX_RAW_COUNT,
        message: format!(
            "{}: raw count {} is outside range [0, {}]",
            category.label(),
            value,
            MAX_RAW_COUNT,
        ),
    })
}
