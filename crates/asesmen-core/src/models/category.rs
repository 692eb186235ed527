use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AssessmentError;

/// One of the three developmental screening domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Autism,
    Adhd,
    IntellectualDisability,
}

impl Category {
    /// All categories in canonical catalog order.
    pub const ALL: [Category; 3] = [
        Category::Autism,
        Category::Adhd,
        Category::IntellectualDisability,
    ];

    /// Stable machine key (e.g., "autism", "intellectual_disability").
    pub fn key(self) -> &'static str {
        match self {
            Category::Autism => "autism",
            Category::Adhd => "adhd",
            Category::IntellectualDisability => "intellectual_disability",
        }
    }

    /// Label shown on the result view.
    pub fn label(self) -> &'static str {
        match self {
            Category::Autism => "Spektrum Autisme",
            Category::Adhd => "ADHD",
            Category::IntellectualDisability => "Intellectual Disability",
        }
    }

    /// Resolve a category from its key. Keys outside the fixed set are a
    /// caller bug and are rejected.
    pub fn from_key(key: &str) -> Result<Self, AssessmentError> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| AssessmentError::UnknownCategory(key.to_string()))
    }
}

impl FromStr for Category {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_key(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
