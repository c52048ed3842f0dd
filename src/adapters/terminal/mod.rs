//! Terminal adapter - text rendering for the command-line questionnaire.

mod render;

pub use render::{render_faq, render_form, render_result, render_submission};
