//! Plain-text rendering of questionnaire state.
//!
//! Pure functions from state to `String`; nothing here reads input or holds
//! state of its own.

use crate::domain::qualification::{
    FaqPanel, QualificationForm, ResultView, SubmissionView, CATALOG, PARAMETER_COUNT,
};

/// Width of the confidence bar in characters.
const BAR_WIDTH: usize = 40;

/// Numbered question list with the current answers and yes count.
pub fn render_form(form: &QualificationForm) -> String {
    let mut out = String::new();
    let name = if form.use_case_name().is_empty() {
        "(unnamed)"
    } else {
        form.use_case_name()
    };
    out.push_str(&format!("Use case: {}\n", name));

    for (idx, param) in CATALOG.iter().enumerate() {
        let mark = if form.answers().get(param.key) { "x" } else { " " };
        out.push_str(&format!("{:>2}. [{}] {}\n", idx + 1, mark, param.label));
    }
    out.push_str(&format!("Yes answers: {} / {}\n", form.yes_count(), PARAMETER_COUNT));
    out
}

/// The single display region driven by the submission state.
pub fn render_submission(view: &SubmissionView<'_>) -> String {
    match view {
        SubmissionView::Placeholder => "Answer the questions and submit to get a recommendation.\n".to_string(),
        SubmissionView::Loading => "Evaluating...\n".to_string(),
        SubmissionView::Error(message) => format!("Error: {}\n", message),
        SubmissionView::Result(result) => render_result(result),
    }
}

/// Label, confidence line and a bar whose length follows the clamped indicator.
pub fn render_result(view: &ResultView) -> String {
    let mut out = String::new();
    let filled = usize::from(view.indicator_width()) * BAR_WIDTH / 100;

    out.push_str(&format!("Recommendation: {}\n", view.label));
    out.push_str(&format!("Confidence (avg · lcl · ucl): {}\n", view.confidence_line()));
    out.push_str(&format!(
        "[{}{}] {}\n",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        view.indicator
    ));
    for warning in &view.warnings {
        out.push_str(&format!("warning: {}\n", warning));
    }
    out
}

/// FAQ accordion: open entries show their answer.
pub fn render_faq(panel: &FaqPanel) -> String {
    let mut out = String::new();
    for (idx, (entry, open)) in panel.iter().enumerate() {
        let marker = if open { "-" } else { "+" };
        out.push_str(&format!("{} {}. {}\n", marker, idx + 1, entry.question));
        if open {
            out.push_str(&format!("    {}\n", entry.answer));
        }
    }
    out
}
