//! Use Case Classifier Port - scoring seam of the bundled prediction service.
//!
//! A trained model or the built-in heuristic turns an answer set into a label
//! and the probability of that label. The service derives the confidence
//! interval from the probability.

use crate::domain::qualification::{AnswerSet, PredictionLabel};
use crate::domain::scoring::{HeuristicClassifier, HEURISTIC_PROBABILITY};

/// Label plus the probability the classifier assigns to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: PredictionLabel,
    pub probability: f64,
}

/// Port for classifiers usable by the prediction service.
pub trait UseCaseClassifier: Send + Sync {
    fn classify(&self, answers: &AnswerSet) -> Classification;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

impl UseCaseClassifier for HeuristicClassifier {
    fn classify(&self, answers: &AnswerSet) -> Classification {
        Classification {
            label: self.label_for(answers),
            probability: HEURISTIC_PROBABILITY,
        }
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::qualification::ParameterKey;

    #[test]
    fn heuristic_reports_fixed_probability() {
        let answers = AnswerSet::new().with(ParameterKey::LanguageGeneration, true);
        let result = HeuristicClassifier::new().classify(&answers);

        assert_eq!(result.label, PredictionLabel::GenAi);
        assert!((result.probability - 0.70).abs() < f64::EPSILON);
    }
}
