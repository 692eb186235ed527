use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::AssessmentError;
use crate::models::category::Category;
use crate::scoring::{CategoryScores, ScoreResult, ValidationError, validate_raw_count};

/// Raw counts handed from the questionnaire to the result view.
///
/// Serializes to the navigation path `result/{autism}/{adhd}/{idd}`. The
/// result view derives percentages from these counts with the same
/// formula as [`crate::scoring::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultRoute {
    pub autism: u32,
    pub adhd: u32,
    pub intellectual_disability: u32,
}

impl ResultRoute {
    pub const PREFIX: &'static str = "result";

    pub fn from_scores(scores: &CategoryScores) -> Self {
        Self {
            autism: scores.autism.raw_count,
            adhd: scores.adhd.raw_count,
            intellectual_disability: scores.intellectual_disability.raw_count,
        }
    }

    pub fn raw_count(&self, category: Category) -> u32 {
        match category {
            Category::Autism => self.autism,
            Category::Adhd => self.adhd,
            Category::IntellectualDisability => self.intellectual_disability,
        }
    }

    /// Check every count is within `0..=18`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for category in Category::ALL {
            validate_raw_count(category, self.raw_count(category))?;
        }
        Ok(())
    }

    /// Recompute the full score structure for the result view.
    pub fn scores(&self) -> Result<CategoryScores, ValidationError> {
        self.validate()?;
        Ok(CategoryScores {
            autism: ScoreResult::from_raw(Category::Autism, self.autism),
            adhd: ScoreResult::from_raw(Category::Adhd, self.adhd),
            intellectual_disability: ScoreResult::from_raw(
                Category::IntellectualDisability,
                self.intellectual_disability,
            ),
        })
    }

    pub fn to_path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            Self::PREFIX,
            self.autism,
            self.adhd,
            self.intellectual_disability
        )
    }

    /// Parse a `result/{autism}/{adhd}/{idd}` path. A leading `/` is
    /// accepted. Counts above 18 are rejected.
    pub fn parse(path: &str) -> Result<Self, AssessmentError> {
        let invalid = |reason: &str| AssessmentError::InvalidRoute {
            route: path.to_string(),
            reason: reason.to_string(),
        };

        let segments: Vec<&str> = path.trim().trim_start_matches('/').split('/').collect();
        let [prefix, autism, adhd, idd] = segments.as_slice() else {
            return Err(invalid("expected result/{autism}/{adhd}/{idd}"));
        };
        if *prefix != Self::PREFIX {
            return Err(invalid("path must start with 'result'"));
        }

        let count = |segment: &str, category: Category| {
            segment
                .parse::<u32>()
                .map_err(|_| invalid(&format!("{} count '{segment}' is not a number", category.key())))
        };

        let route = Self {
            autism: count(*autism, Category::Autism)?,
            adhd: count(*adhd, Category::Adhd)?,
            intellectual_disability: count(*idd, Category::IntellectualDisability)?,
        };
        route.validate()?;
        Ok(route)
    }
}

impl From<CategoryScores> for ResultRoute {
    fn from(scores: CategoryScores) -> Self {
        Self::from_scores(&scores)
    }
}

impl FromStr for ResultRoute {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResultRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
