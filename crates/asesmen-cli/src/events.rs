use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// What happened in the questionnaire flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowAction {
    SessionStarted,
    AnswerRecorded,
    ResultsShown,
    ResultsRefused,
    Restarted,
}

impl FlowAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowAction::SessionStarted => "session_started",
            FlowAction::AnswerRecorded => "answer_recorded",
            FlowAction::ResultsShown => "results_shown",
            FlowAction::ResultsRefused => "results_refused",
            FlowAction::Restarted => "restarted",
        }
    }
}

/// A structured event for one user intent handled by the flow.
///
/// Logged via `tracing` only. Nothing is persisted or sent anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct FlowEvent {
    pub action: FlowAction,
    pub session_id: Uuid,
    pub details: Option<serde_json::Value>,
}

impl FlowEvent {
    pub fn new(action: FlowAction, session_id: Uuid) -> Self {
        Self {
            action,
            session_id,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            flow.action = self.action.as_str(),
            flow.session_id = %self.session_id,
            flow.details = %details,
            "flow event"
        );
    }
}
