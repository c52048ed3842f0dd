//! Submission lifecycle: Idle → Pending → Succeeded | Failed.

use crate::domain::foundation::StateMachine;

use super::prediction::PredictionResponse;
use super::result_view::ResultView;

/// State of the current (or last) prediction submission.
///
/// A result and an error can never coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded(PredictionResponse),
    Failed(String),
}

/// Data-free discriminant of [`SubmissionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl StateMachine for SubmissionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, target),
            (Idle, Pending)
                | (Pending, Succeeded)
                | (Pending, Failed)
                | (Succeeded, Pending)
                | (Failed, Pending)
                // reset
                | (Pending, Idle)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionPhase::*;
        match self {
            Idle => vec![Pending],
            Pending => vec![Succeeded, Failed, Idle],
            Succeeded | Failed => vec![Pending, Idle],
        }
    }
}

/// What the page shows for a given submission state. Exactly one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionView<'a> {
    Placeholder,
    Loading,
    Error(&'a str),
    Result(ResultView),
}

impl SubmissionState {
    pub fn phase(&self) -> SubmissionPhase {
        match self {
            SubmissionState::Idle => SubmissionPhase::Idle,
            SubmissionState::Pending => SubmissionPhase::Pending,
            SubmissionState::Succeeded(_) => SubmissionPhase::Succeeded,
            SubmissionState::Failed(_) => SubmissionPhase::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn response(&self) -> Option<&PredictionResponse> {
        match self {
            SubmissionState::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Maps the state onto the single display region it drives.
    pub fn view(&self) -> SubmissionView<'_> {
        match self {
            SubmissionState::Idle => SubmissionView::Placeholder,
            SubmissionState::Pending => SubmissionView::Loading,
            SubmissionState::Failed(message) => SubmissionView::Error(message),
            SubmissionState::Succeeded(response) => {
                SubmissionView::Result(ResultView::from_response(response))
            }
        }
    }
}
