//! Qualification handlers - questionnaire lifecycle.

mod session;

pub use session::{QualificationSession, SubmissionTicket};
