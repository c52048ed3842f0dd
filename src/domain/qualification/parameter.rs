//! The fixed catalog of qualification questions.
//!
//! The catalog is the de-facto API schema shared with the prediction service:
//! every key here is a field on the wire, in this order. Answer storage is
//! indexed by [`ParameterKey`], so a key can never be missing from an answer
//! set nor present without a catalog entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of questions in the catalog.
pub const PARAMETER_COUNT: usize = 15;

/// Identifier of one yes/no question.
///
/// Discriminants are the display order and index into answer storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    IsProcessSimple = 0,
    CanSpecifyBusinessRules,
    WillOccasionalErrorsBeTolerated,
    WillErrorBePropagated,
    IsUseCaseTransactionalInNature,
    AreYouBuildingLearningSystem,
    HighStakesEnvironment,
    HyperPersonalization,
    UnstructuredTextInput,
    IsInputDataMultiModal,
    LanguageGeneration,
    AreAutonomousDecisionsRequired,
    IsReasoningRequired,
    ToolIntegration,
    DynamicGoals,
}

impl ParameterKey {
    /// All keys in display (and wire) order.
    pub const ALL: [ParameterKey; PARAMETER_COUNT] = [
        ParameterKey::IsProcessSimple,
        ParameterKey::CanSpecifyBusinessRules,
        ParameterKey::WillOccasionalErrorsBeTolerated,
        ParameterKey::WillErrorBePropagated,
        ParameterKey::IsUseCaseTransactionalInNature,
        ParameterKey::AreYouBuildingLearningSystem,
        ParameterKey::HighStakesEnvironment,
        ParameterKey::HyperPersonalization,
        ParameterKey::UnstructuredTextInput,
        ParameterKey::IsInputDataMultiModal,
        ParameterKey::LanguageGeneration,
        ParameterKey::AreAutonomousDecisionsRequired,
        ParameterKey::IsReasoningRequired,
        ParameterKey::ToolIntegration,
        ParameterKey::DynamicGoals,
    ];

    /// Returns all keys in display order.
    pub fn all() -> &'static [ParameterKey] {
        &Self::ALL
    }

    /// Returns the 0-based position of this key in the catalog.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the wire field name.
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterKey::IsProcessSimple => "is_process_simple",
            ParameterKey::CanSpecifyBusinessRules => "can_specify_business_rules",
            ParameterKey::WillOccasionalErrorsBeTolerated => "will_occasional_errors_be_tolerated",
            ParameterKey::WillErrorBePropagated => "will_error_be_propagated",
            ParameterKey::IsUseCaseTransactionalInNature => "is_use_case_transactional_in_nature",
            ParameterKey::AreYouBuildingLearningSystem => "are_you_building_learning_system",
            ParameterKey::HighStakesEnvironment => "high_stakes_environment",
            ParameterKey::HyperPersonalization => "hyper_personalization",
            ParameterKey::UnstructuredTextInput => "unstructured_text_input",
            ParameterKey::IsInputDataMultiModal => "is_input_data_multi_modal",
            ParameterKey::LanguageGeneration => "language_generation",
            ParameterKey::AreAutonomousDecisionsRequired => "are_autonomous_decisions_required",
            ParameterKey::IsReasoningRequired => "is_reasoning_required",
            ParameterKey::ToolIntegration => "tool_integration",
            ParameterKey::DynamicGoals => "dynamic_goals",
        }
    }

    /// Returns the catalog entry for this key.
    pub fn parameter(self) -> &'static Parameter {
        &CATALOG[self.index()]
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_parameter(s))
    }
}

/// One question definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub key: ParameterKey,
    /// Short question shown next to the toggle.
    pub label: &'static str,
    /// Help text shown under the question.
    pub description: &'static str,
}

/// The ordered question catalog.
pub static CATALOG: [Parameter; PARAMETER_COUNT] = [
    Parameter {
        key: ParameterKey::IsProcessSimple,
        label: "Is the process simple?",
        description: "The work follows a short, well-understood sequence of steps with few branches.",
    },
    Parameter {
        key: ParameterKey::CanSpecifyBusinessRules,
        label: "Can you specify the business rules?",
        description: "Every decision can be written down as explicit if/then rules by a domain expert.",
    },
    Parameter {
        key: ParameterKey::WillOccasionalErrorsBeTolerated,
        label: "Will occasional errors be tolerated?",
        description: "An occasional wrong output is acceptable as long as quality is good on average.",
    },
    Parameter {
        key: ParameterKey::WillErrorBePropagated,
        label: "Will an error be propagated downstream?",
        description: "A mistake feeds into later steps or systems before anyone can catch it.",
    },
    Parameter {
        key: ParameterKey::IsUseCaseTransactionalInNature,
        label: "Is the use case transactional in nature?",
        description: "Work arrives as discrete, independent transactions such as claims, orders or tickets.",
    },
    Parameter {
        key: ParameterKey::AreYouBuildingLearningSystem,
        label: "Are you building a learning system?",
        description: "The solution should improve from historical data rather than from hand-written logic.",
    },
    Parameter {
        key: ParameterKey::HighStakesEnvironment,
        label: "Is this a high-stakes environment?",
        description: "Decisions carry material financial, legal, safety or reputational consequences.",
    },
    Parameter {
        key: ParameterKey::HyperPersonalization,
        label: "Is hyper-personalization needed?",
        description: "Each output must be tailored to the individual user, customer or context.",
    },
    Parameter {
        key: ParameterKey::UnstructuredTextInput,
        label: "Is the input unstructured text?",
        description: "Inputs are free-form documents, emails, chats or notes rather than tables.",
    },
    Parameter {
        key: ParameterKey::IsInputDataMultiModal,
        label: "Is the input data multi-modal?",
        description: "Inputs mix modalities such as text, images, audio or video.",
    },
    Parameter {
        key: ParameterKey::LanguageGeneration,
        label: "Is language generation required?",
        description: "The solution must write natural-language content such as summaries, replies or drafts.",
    },
    Parameter {
        key: ParameterKey::AreAutonomousDecisionsRequired,
        label: "Are autonomous decisions required?",
        description: "The system acts on its own decisions without a human approving each step.",
    },
    Parameter {
        key: ParameterKey::IsReasoningRequired,
        label: "Is multi-step reasoning required?",
        description: "Reaching an answer requires planning, weighing evidence or chaining several inferences.",
    },
    Parameter {
        key: ParameterKey::ToolIntegration,
        label: "Is tool integration needed?",
        description: "The solution must call external APIs, databases or applications to complete its work.",
    },
    Parameter {
        key: ParameterKey::DynamicGoals,
        label: "Are the goals dynamic?",
        description: "Objectives shift during execution and the system must re-plan as they change.",
    },
];
