//! The welcome → questionnaire → result view-model.
//!
//! [`Flow`] owns the active [`Session`] explicitly; every user intent goes
//! through one of its methods, so the whole screen sequence can be driven
//! and tested without a terminal.

use asesmen_core::{AssessmentError, CategoryScores, Progress, ResultRoute, Session};
use thiserror::Error;

use crate::events::{FlowAction, FlowEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Questionnaire,
    Result(ResultRoute),
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("no assessment in progress")]
    NotStarted,

    #[error("assessment incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

#[derive(Debug)]
pub struct Flow {
    screen: Screen,
    session: Option<Session>,
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}

impl Flow {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            session: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Begin a new attempt over a fresh catalog, discarding any previous one.
    pub fn start_assessment(&mut self) -> &Session {
        let session = Session::start();
        FlowEvent::new(FlowAction::SessionStarted, session.id()).emit();
        self.screen = Screen::Questionnaire;
        self.session.insert(session)
    }

    pub fn answer(&mut self, index: usize, value: bool) -> Result<Progress, FlowError> {
        let session = self.session.as_mut().ok_or(FlowError::NotStarted)?;
        session.record_answer(index, value)?;

        let progress = session.progress();
        FlowEvent::new(FlowAction::AnswerRecorded, session.id())
            .with_details(serde_json::json!({
                "index": index,
                "value": value,
                "answered": progress.answered,
            }))
            .emit();
        Ok(progress)
    }

    /// Whether the "Lihat Hasil Asesmen" action is enabled.
    pub fn can_request_results(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_complete)
    }

    /// Move to the result screen. Refused until every question is answered.
    pub fn request_results(&mut self) -> Result<ResultRoute, FlowError> {
        let session = self.session.as_ref().ok_or(FlowError::NotStarted)?;
        let progress = session.progress();
        if !progress.is_complete() {
            FlowEvent::new(FlowAction::ResultsRefused, session.id())
                .with_details(serde_json::json!({ "answered": progress.answered }))
                .emit();
            return Err(FlowError::Incomplete {
                answered: progress.answered,
                total: progress.total,
            });
        }

        let route = ResultRoute::from_scores(&session.score());
        FlowEvent::new(FlowAction::ResultsShown, session.id())
            .with_details(serde_json::json!({ "route": route.to_path() }))
            .emit();
        self.screen = Screen::Result(route);
        Ok(route)
    }

    /// Scores for the result screen, recomputed from the route's raw counts.
    pub fn result_scores(&self) -> Option<CategoryScores> {
        match self.screen {
            Screen::Result(route) => route.scores().ok(),
            _ => None,
        }
    }

    /// Drop the current session and return to the welcome screen.
    pub fn restart(&mut self) {
        if let Some(session) = self.session.take() {
            FlowEvent::new(FlowAction::Restarted, session.id()).emit();
        }
        self.screen = Screen::Welcome;
    }
}
