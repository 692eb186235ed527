//! The fixed question catalog.
//!
//! Each category's prompts live in their own module as a [`QuestionSet`].
//! The wording is domain data and must stay verbatim; the catalog order is
//! category-grouped (autism, ADHD, intellectual disability) and then source
//! order within each category.

pub mod adhd;
pub mod autism;
pub mod intellectual_disability;

use crate::models::category::Category;
use crate::models::question::Question;

/// Number of questions in each category.
pub const CATEGORY_SIZE: usize = 18;

/// Number of questions in the whole catalog.
pub const CATALOG_SIZE: usize = CATEGORY_SIZE * Category::ALL.len();

/// Trait implemented by each category's set of screening prompts.
pub trait QuestionSet: Send + Sync {
    /// The category every prompt in this set belongs to.
    fn category(&self) -> Category;

    /// The prompts, in source order.
    fn prompts(&self) -> &[&'static str; CATEGORY_SIZE];

    /// Human-readable name for this set.
    fn label(&self) -> &str {
        self.category().label()
    }

    /// Fresh, unanswered questions for this set.
    fn questions(&self) -> Vec<Question> {
        self.prompts()
            .iter()
            .map(|text| Question::new(*text, self.category()))
            .collect()
    }
}

/// Return all question sets in catalog order.
pub fn all_question_sets() -> Vec<Box<dyn QuestionSet>> {
    vec![
        Box::new(autism::Autism),
        Box::new(adhd::Adhd),
        Box::new(intellectual_disability::IntellectualDisability),
    ]
}

/// Look up the question set for a category.
pub fn question_set(category: Category) -> Box<dyn QuestionSet> {
    match category {
        Category::Autism => Box::new(autism::Autism),
        Category::Adhd => Box::new(adhd::Adhd),
        Category::IntellectualDisability => Box::new(intellectual_disability::IntellectualDisability),
    }
}

/// Build the canonical 54-question catalog, all unanswered.
pub fn generate_catalog() -> Vec<Question> {
    all_question_sets()
        .iter()
        .flat_map(|set| set.questions())
        .collect()
}
