//! Application handlers.

pub mod qualification;

pub use qualification::{QualificationSession, SubmissionTicket};
