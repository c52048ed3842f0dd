//! Rule-based classifier.
//!
//! Stands in for a trained model so the service can answer without one.
//! Rules are checked in order and the first match wins.

use crate::domain::qualification::{AnswerSet, ParameterKey, PredictionLabel};

/// Probability reported for every heuristic prediction.
pub const HEURISTIC_PROBABILITY: f64 = 0.70;

/// Minimum number of agentic signals for an `Agentic AI` label.
const AGENTIC_THRESHOLD: usize = 3;

const AGENTIC_SIGNALS: [ParameterKey; 4] = [
    ParameterKey::AreAutonomousDecisionsRequired,
    ParameterKey::IsReasoningRequired,
    ParameterKey::ToolIntegration,
    ParameterKey::DynamicGoals,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Picks a label for the given answers.
    pub fn label_for(&self, answers: &AnswerSet) -> PredictionLabel {
        let agentic_score = AGENTIC_SIGNALS
            .iter()
            .filter(|key| answers.get(**key))
            .count();

        if answers.get(ParameterKey::LanguageGeneration) {
            PredictionLabel::GenAi
        } else if agentic_score >= AGENTIC_THRESHOLD {
            PredictionLabel::AgenticAi
        } else if answers.get(ParameterKey::CanSpecifyBusinessRules)
            && !answers.get(ParameterKey::AreYouBuildingLearningSystem)
        {
            PredictionLabel::BusinessAutomation
        } else {
            PredictionLabel::ClassicalMl
        }
    }
}
