//! asesmen-core
//!
//! Pure domain logic for the developmental screening questionnaire. No I/O.
//! Defines the three screening categories, the fixed 54-question catalog,
//! the per-attempt answer session, and the category scoring rules.

pub mod catalog;
pub mod error;
pub mod models;
pub mod route;
pub mod scoring;
pub mod session;

pub use catalog::{CATALOG_SIZE, CATEGORY_SIZE, generate_catalog};
pub use error::AssessmentError;
pub use models::answer::Answer;
pub use models::category::Category;
pub use models::question::Question;
pub use route::ResultRoute;
pub use scoring::{CategoryScores, ScoreResult, score};
pub use session::{Progress, Session};
