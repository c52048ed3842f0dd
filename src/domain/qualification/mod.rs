//! Qualification module - questionnaire state and the prediction contract.
//!
//! - `parameter` - the fixed catalog of 15 questions
//! - `answers` - one boolean per catalog key
//! - `form` - use-case name + answers
//! - `prediction` - wire request/response shapes
//! - `submission` - submission lifecycle state machine
//! - `result_view` - display values for a successful prediction
//! - `faq` - static FAQ accordion

mod answers;
mod faq;
mod form;
mod parameter;
mod prediction;
mod result_view;
mod submission;

pub use answers::AnswerSet;
pub use faq::{FaqEntry, FaqPanel, FAQ_ENTRIES};
pub use form::QualificationForm;
pub use parameter::{Parameter, ParameterKey, CATALOG, PARAMETER_COUNT};
pub use prediction::{
    ConfidenceAnomaly, PredictionLabel, PredictionRequest, PredictionResponse,
    DEFAULT_USE_CASE_NAME, USE_CASE_NAME_FIELD,
};
pub use result_view::ResultView;
pub use submission::{SubmissionPhase, SubmissionState, SubmissionView};
