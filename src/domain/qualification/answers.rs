//! Complete set of yes/no answers, one per catalog parameter.

use std::ops::Index;

use super::parameter::{ParameterKey, PARAMETER_COUNT};

/// Boolean answer for every catalog key.
///
/// Storage is a fixed array indexed by [`ParameterKey`], so the key set always
/// equals the catalog. A fresh set answers "no" to everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnswerSet([bool; PARAMETER_COUNT]);

impl AnswerSet {
    /// Creates an answer set with every answer `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the answer for `key`.
    pub fn get(&self, key: ParameterKey) -> bool {
        self.0[key.index()]
    }

    /// Sets a single answer; all others are untouched.
    pub fn set(&mut self, key: ParameterKey, value: bool) {
        self.0[key.index()] = value;
    }

    /// Builder-style variant of [`AnswerSet::set`].
    pub fn with(mut self, key: ParameterKey, value: bool) -> Self {
        self.set(key, value);
        self
    }

    /// Resets every answer to `false`.
    pub fn clear(&mut self) {
        self.0 = [false; PARAMETER_COUNT];
    }

    /// Number of `true` answers.
    pub fn yes_count(&self) -> usize {
        self.0.iter().filter(|answer| **answer).count()
    }

    /// Iterates `(key, answer)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, bool)> + '_ {
        ParameterKey::ALL.iter().map(move |key| (*key, self.get(*key)))
    }

    /// Answers encoded as 0/1 in catalog order.
    pub fn as_flags(&self) -> [u8; PARAMETER_COUNT] {
        self.0.map(u8::from)
    }
}

impl Index<ParameterKey> for AnswerSet {
    type Output = bool;

    fn index(&self, key: ParameterKey) -> &bool {
        &self.0[key.index()]
    }
}

impl FromIterator<ParameterKey> for AnswerSet {
    /// Collects the keys answered "yes".
    fn from_iter<I: IntoIterator<Item = ParameterKey>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for key in iter {
            answers.set(key, true);
        }
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_answer_set_is_all_false() {
        let answers = AnswerSet::new();
        assert_eq!(answers.yes_count(), 0);
        assert!(answers.iter().all(|(_, value)| !value));
    }

    #[test]
    fn set_changes_only_the_target_key() {
        let mut answers = AnswerSet::new();
        answers.set(ParameterKey::ToolIntegration, true);

        for (key, value) in answers.iter() {
            assert_eq!(value, key == ParameterKey::ToolIntegration);
        }
    }

    #[test]
    fn iter_visits_every_key_in_catalog_order() {
        let keys: Vec<_> = AnswerSet::new().iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ParameterKey::ALL.to_vec());
    }

    #[test]
    fn clear_resets_everything() {
        let mut answers: AnswerSet = ParameterKey::ALL.into_iter().collect();
        assert_eq!(answers.yes_count(), 15);

        answers.clear();
        assert_eq!(answers, AnswerSet::new());
    }

    #[test]
    fn flags_encode_answers_as_zero_and_one() {
        let answers = AnswerSet::new()
            .with(ParameterKey::IsProcessSimple, true)
            .with(ParameterKey::DynamicGoals, true);
        let flags = answers.as_flags();

        assert_eq!(flags[0], 1);
        assert_eq!(flags[14], 1);
        assert_eq!(flags.iter().map(|f| u32::from(*f)).sum::<u32>(), 2);
    }

    #[test]
    fn index_reads_answer() {
        let answers = AnswerSet::new().with(ParameterKey::HighStakesEnvironment, true);
        assert!(answers[ParameterKey::HighStakesEnvironment]);
        assert!(!answers[ParameterKey::HyperPersonalization]);
    }

    proptest! {
        #[test]
        fn yes_count_matches_true_entries(ops in prop::collection::vec((0usize..15, any::<bool>()), 0..100)) {
            let mut answers = AnswerSet::new();
            let mut model = [false; PARAMETER_COUNT];
            for (idx, value) in ops {
                answers.set(ParameterKey::ALL[idx], value);
                model[idx] = value;
            }
            prop_assert_eq!(answers.yes_count(), model.iter().filter(|v| **v).count());
            prop_assert!(answers.yes_count() <= PARAMETER_COUNT);
        }
    }
}
