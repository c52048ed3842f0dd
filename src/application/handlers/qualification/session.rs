//! QualificationSession - owns the form and drives the submission lifecycle.
//!
//! Every submission gets a generation number. A completion is applied only if
//! its generation is still the current one and the session is still pending,
//! so a late response can never overwrite a newer submission or a reset.

use std::sync::Arc;

use crate::domain::foundation::StateMachine;
use crate::domain::qualification::{
    ParameterKey, PredictionRequest, PredictionResponse, QualificationForm, SubmissionState,
};
use crate::ports::{PredictionError, PredictionService};

/// Handle for one in-flight submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
    request: PredictionRequest,
}

impl SubmissionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &PredictionRequest {
        &self.request
    }
}

/// Questionnaire controller: form state, submission state, prediction port.
pub struct QualificationSession {
    form: QualificationForm,
    state: SubmissionState,
    generation: u64,
    service: Arc<dyn PredictionService>,
}

impl QualificationSession {
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self::with_form(service, QualificationForm::new())
    }

    pub fn with_form(service: Arc<dyn PredictionService>, form: QualificationForm) -> Self {
        Self {
            form,
            state: SubmissionState::Idle,
            generation: 0,
            service,
        }
    }

    pub fn form(&self) -> &QualificationForm {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn yes_count(&self) -> usize {
        self.form.yes_count()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.state.is_pending()
    }

    pub fn set_use_case_name(&mut self, name: impl Into<String>) {
        self.form.set_use_case_name(name);
    }

    pub fn set_answer(&mut self, key: ParameterKey, value: bool) {
        self.form.set_answer(key, value);
    }

    pub fn toggle_answer(&mut self, key: ParameterKey) -> bool {
        self.form.toggle_answer(key)
    }

    /// Clears every answer and any result or error. The name is kept.
    ///
    /// A submission still in flight is orphaned: its completion is discarded.
    pub fn reset_all(&mut self) {
        self.form.reset_answers();
        self.generation += 1;
        self.transition(SubmissionState::Idle);
    }

    /// Starts a submission: snapshots the payload and moves to `Pending`.
    ///
    /// Any previous result or error is cleared immediately. Starting while
    /// another submission is pending supersedes it.
    pub fn begin_submission(&mut self) -> SubmissionTicket {
        self.generation += 1;
        let request = PredictionRequest::from_form(&self.form);
        self.transition(SubmissionState::Pending);

        tracing::debug!(
            generation = self.generation,
            yes_count = self.form.yes_count(),
            "Submission started"
        );

        SubmissionTicket {
            generation: self.generation,
            request,
        }
    }

    /// Applies the outcome of a submission.
    ///
    /// Returns `false` (and leaves state untouched) when the ticket is stale.
    pub fn complete(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<PredictionResponse, PredictionError>,
    ) -> bool {
        if ticket.generation != self.generation || !self.state.is_pending() {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale prediction outcome"
            );
            return false;
        }

        let next = match outcome {
            Ok(response) => {
                for anomaly in response.anomalies() {
                    tracing::warn!(%anomaly, "Prediction outside confidence contract");
                }
                SubmissionState::Succeeded(response)
            }
            Err(err) => SubmissionState::Failed(err.user_message()),
        };
        self.transition(next);
        true
    }

    /// Runs one full submission against the prediction service.
    pub async fn submit(&mut self) -> &SubmissionState {
        let ticket = self.begin_submission();
        let outcome = self.service.predict(ticket.request()).await;
        self.complete(&ticket, outcome);
        &self.state
    }

    fn transition(&mut self, next: SubmissionState) {
        let from = self.state.phase();
        let to = next.phase();
        if from != to {
            if let Err(err) = from.transition_to(to) {
                tracing::warn!(error = %err, "Ignoring invalid submission transition");
                return;
            }
        }
        tracing::debug!(?from, ?to, "Submission state changed");
        self.state = next;
    }
}
