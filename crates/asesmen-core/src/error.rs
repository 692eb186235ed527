use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("question index {index} is out of range (catalog has {total} questions)")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid result route '{route}': {reason}")]
    InvalidRoute { route: String, reason: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
