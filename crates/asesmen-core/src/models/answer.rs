use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The answer state of a single question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Answer {
    #[default]
    Unanswered,
    /// "Ya"
    Yes,
    /// "Tidak"
    No,
}

impl Answer {
    pub fn is_answered(self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Answer::Unanswered => None,
            Answer::Yes => Some(true),
            Answer::No => Some(false),
        }
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        if value { Answer::Yes } else { Answer::No }
    }
}
