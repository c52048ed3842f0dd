//! Qualification form state: use-case name plus the answer set.

use super::answers::AnswerSet;
use super::parameter::ParameterKey;

/// Editable questionnaire state.
///
/// Operations are total: the name is free text and answers are addressed by
/// a closed key type. Submission-related state lives in
/// [`crate::application::handlers::qualification::QualificationSession`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualificationForm {
    use_case_name: String,
    answers: AnswerSet,
}

impl QualificationForm {
    /// Creates an empty form: no name, every answer "no".
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form with the given use-case name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            use_case_name: name.into(),
            answers: AnswerSet::new(),
        }
    }

    pub fn use_case_name(&self) -> &str {
        &self.use_case_name
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Replaces the use-case name verbatim.
    pub fn set_use_case_name(&mut self, name: impl Into<String>) {
        self.use_case_name = name.into();
    }

    /// Sets a single answer.
    pub fn set_answer(&mut self, key: ParameterKey, value: bool) {
        self.answers.set(key, value);
    }

    /// Flips a single answer and returns the new value.
    pub fn toggle_answer(&mut self, key: ParameterKey) -> bool {
        let value = !self.answers.get(key);
        self.answers.set(key, value);
        value
    }

    /// Sets every answer back to "no". The name is kept.
    pub fn reset_answers(&mut self) {
        self.answers.clear();
    }

    /// Number of questions answered "yes".
    pub fn yes_count(&self) -> usize {
        self.answers.yes_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_empty() {
        let form = QualificationForm::new();
        assert_eq!(form.use_case_name(), "");
        assert_eq!(form.yes_count(), 0);
    }

    #[test]
    fn set_use_case_name_keeps_text_verbatim() {
        let mut form = QualificationForm::new();
        form.set_use_case_name("  Claims Triage  ");
        assert_eq!(form.use_case_name(), "  Claims Triage  ");
    }

    #[test]
    fn set_answer_updates_yes_count() {
        let mut form = QualificationForm::new();
        form.set_answer(ParameterKey::IsReasoningRequired, true);
        form.set_answer(ParameterKey::ToolIntegration, true);
        assert_eq!(form.yes_count(), 2);

        form.set_answer(ParameterKey::ToolIntegration, false);
        assert_eq!(form.yes_count(), 1);
        assert!(form.answers().get(ParameterKey::IsReasoningRequired));
    }

    #[test]
    fn setting_same_answer_twice_is_idempotent() {
        let mut form = QualificationForm::new();
        form.set_answer(ParameterKey::DynamicGoals, true);
        form.set_answer(ParameterKey::DynamicGoals, true);
        assert_eq!(form.yes_count(), 1);
    }

    #[test]
    fn toggle_answer_flips_value() {
        let mut form = QualificationForm::new();
        assert!(form.toggle_answer(ParameterKey::LanguageGeneration));
        assert!(!form.toggle_answer(ParameterKey::LanguageGeneration));
        assert_eq!(form.yes_count(), 0);
    }

    #[test]
    fn reset_answers_preserves_name() {
        let mut form = QualificationForm::with_name("Invoice Matching");
        form.set_answer(ParameterKey::IsProcessSimple, true);
        form.reset_answers();

        assert_eq!(form.yes_count(), 0);
        assert_eq!(form.use_case_name(), "Invoice Matching");
    }
}
