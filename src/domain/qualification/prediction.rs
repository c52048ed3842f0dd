//! Prediction request/response contract with the external service.
//!
//! # Request
//!
//! ```text
//! { "use_case_name": "...", "is_process_simple": 0, ..., "dynamic_goals": 1 }
//! ```
//!
//! Answers travel as integers `0`/`1`, never as JSON booleans, and fields are
//! written in catalog order.
//!
//! # Response
//!
//! ```text
//! { "label": "Classical ML", "avg_confidence": 0.86, "lcl": 0.81, "ucl": 0.90 }
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::answers::AnswerSet;
use super::form::QualificationForm;
use super::parameter::{ParameterKey, PARAMETER_COUNT};

/// Name sent when the user left the use-case name empty.
pub const DEFAULT_USE_CASE_NAME: &str = "Untitled use case";

/// Wire field carrying the use-case name.
pub const USE_CASE_NAME_FIELD: &str = "use_case_name";

/// Outgoing prediction payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    use_case_name: String,
    answers: AnswerSet,
}

impl PredictionRequest {
    /// Builds the payload from form state.
    ///
    /// An empty name is replaced by [`DEFAULT_USE_CASE_NAME`]; any other name
    /// is sent exactly as typed.
    pub fn from_form(form: &QualificationForm) -> Self {
        let name = form.use_case_name();
        let use_case_name = if name.is_empty() {
            DEFAULT_USE_CASE_NAME.to_string()
        } else {
            name.to_string()
        };

        Self {
            use_case_name,
            answers: *form.answers(),
        }
    }

    /// Decodes a payload received by the prediction service.
    ///
    /// Every catalog key is required and must be the integer `0` or `1`.
    pub fn from_json_map(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let use_case_name = match body.get(USE_CASE_NAME_FIELD) {
            Some(Value::String(name)) => name.clone(),
            Some(_) => {
                return Err(ValidationError::invalid_format(
                    USE_CASE_NAME_FIELD,
                    "expected a string",
                ))
            }
            None => return Err(ValidationError::missing_field(USE_CASE_NAME_FIELD)),
        };

        let mut answers = AnswerSet::new();
        for key in ParameterKey::ALL {
            let field = key.as_str();
            let value = body
                .get(field)
                .ok_or_else(|| ValidationError::missing_field(field))?;
            let flag = value.as_i64().ok_or_else(|| {
                ValidationError::invalid_format(field, format!("expected an integer, got {}", value))
            })?;
            match flag {
                0 => answers.set(key, false),
                1 => answers.set(key, true),
                other => {
                    return Err(ValidationError::out_of_range(field, 0, 1, other.to_string()))
                }
            }
        }

        Ok(Self {
            use_case_name,
            answers,
        })
    }

    pub fn use_case_name(&self) -> &str {
        &self.use_case_name
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }
}

impl Serialize for PredictionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PARAMETER_COUNT + 1))?;
        map.serialize_entry(USE_CASE_NAME_FIELD, &self.use_case_name)?;
        for (key, flag) in ParameterKey::ALL.iter().zip(self.answers.as_flags()) {
            map.serialize_entry(key.as_str(), &flag)?;
        }
        map.end()
    }
}

/// The closed set of categories the service can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionLabel {
    #[serde(rename = "Agentic AI")]
    AgenticAi,
    #[serde(rename = "Classical ML")]
    ClassicalMl,
    #[serde(rename = "Gen AI")]
    GenAi,
    #[serde(rename = "Business Automation")]
    BusinessAutomation,
}

impl PredictionLabel {
    /// Labels in the service's class-index order.
    pub const ALL: [PredictionLabel; 4] = [
        PredictionLabel::AgenticAi,
        PredictionLabel::ClassicalMl,
        PredictionLabel::GenAi,
        PredictionLabel::BusinessAutomation,
    ];

    /// Looks up a label by class index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Class index used by the scoring model.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PredictionLabel::AgenticAi => "Agentic AI",
            PredictionLabel::ClassicalMl => "Classical ML",
            PredictionLabel::GenAi => "Gen AI",
            PredictionLabel::BusinessAutomation => "Business Automation",
        }
    }
}

impl fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Successful prediction as returned by the service.
///
/// Numbers are passed through untouched; see [`PredictionResponse::anomalies`]
/// for values outside the intended contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub label: PredictionLabel,
    pub avg_confidence: f64,
    pub ucl: f64,
    pub lcl: f64,
}

/// A confidence value that breaks the intended `[0, 1]`, `lcl <= avg <= ucl` contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfidenceAnomaly {
    OutOfRange { field: &'static str, value: f64 },
    InvertedInterval { lcl: f64, avg_confidence: f64, ucl: f64 },
}

impl fmt::Display for ConfidenceAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceAnomaly::OutOfRange { field, value } => {
                write!(f, "{} = {} is outside [0, 1]", field, value)
            }
            ConfidenceAnomaly::InvertedInterval {
                lcl,
                avg_confidence,
                ucl,
            } => write!(
                f,
                "interval is not ordered: lcl {} / avg {} / ucl {}",
                lcl, avg_confidence, ucl
            ),
        }
    }
}

impl PredictionResponse {
    /// Reports contract violations without rejecting the response.
    pub fn anomalies(&self) -> Vec<ConfidenceAnomaly> {
        let mut found = Vec::new();
        for (field, value) in [
            ("avg_confidence", self.avg_confidence),
            ("lcl", self.lcl),
            ("ucl", self.ucl),
        ] {
            if !(0.0..=1.0).contains(&value) {
                found.push(ConfidenceAnomaly::OutOfRange { field, value });
            }
        }
        if !(self.lcl <= self.avg_confidence && self.avg_confidence <= self.ucl) {
            found.push(ConfidenceAnomaly::InvertedInterval {
                lcl: self.lcl,
                avg_confidence: self.avg_confidence,
                ucl: self.ucl,
            });
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn to_map(request: &PredictionRequest) -> Map<String, Value> {
        match serde_json::to_value(request).unwrap() {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn empty_name_uses_fallback() {
        let request = PredictionRequest::from_form(&QualificationForm::new());
        assert_eq!(request.use_case_name(), DEFAULT_USE_CASE_NAME);
    }

    #[test]
    fn non_empty_name_is_sent_verbatim() {
        let form = QualificationForm::with_name(" Automated Claims Triage ");
        let request = PredictionRequest::from_form(&form);
        assert_eq!(request.use_case_name(), " Automated Claims Triage ");
    }

    #[test]
    fn whitespace_only_name_is_not_replaced() {
        let form = QualificationForm::with_name("   ");
        assert_eq!(PredictionRequest::from_form(&form).use_case_name(), "   ");
    }

    #[test]
    fn serialized_payload_lists_name_then_catalog_keys() {
        let request = PredictionRequest::from_form(&QualificationForm::with_name("x"));
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.starts_with(r#"{"use_case_name":"x","is_process_simple":0"#));
        assert!(json.ends_with(r#""tool_integration":0,"dynamic_goals":0}"#));
    }

    #[test]
    fn serialized_answers_are_integers() {
        let mut form = QualificationForm::with_name("x");
        form.set_answer(ParameterKey::ToolIntegration, true);
        let map = to_map(&PredictionRequest::from_form(&form));

        assert_eq!(map["tool_integration"], json!(1));
        assert_eq!(map["dynamic_goals"], json!(0));
        assert!(!map.values().any(Value::is_boolean));
    }

    #[test]
    fn end_to_end_payload_for_all_false_answers() {
        let form = QualificationForm::with_name("Automated Claims Triage");
        let map = to_map(&PredictionRequest::from_form(&form));

        assert_eq!(map.len(), 16);
        assert_eq!(map["use_case_name"], json!("Automated Claims Triage"));
        for key in ParameterKey::ALL {
            assert_eq!(map[key.as_str()], json!(0), "{} should be 0", key);
        }
    }

    #[test]
    fn from_json_map_accepts_service_payload() {
        let mut form = QualificationForm::with_name("Claims");
        form.set_answer(ParameterKey::LanguageGeneration, true);
        let original = PredictionRequest::from_form(&form);

        let decoded = PredictionRequest::from_json_map(&to_map(&original)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn from_json_map_requires_every_key() {
        let mut map = to_map(&PredictionRequest::from_form(&QualificationForm::new()));
        map.remove("hyper_personalization");

        let err = PredictionRequest::from_json_map(&map).unwrap_err();
        assert_eq!(err, ValidationError::missing_field("hyper_personalization"));
    }

    #[test]
    fn from_json_map_rejects_booleans() {
        let mut map = to_map(&PredictionRequest::from_form(&QualificationForm::new()));
        map.insert("dynamic_goals".to_string(), json!(true));

        let err = PredictionRequest::from_json_map(&map).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "dynamic_goals"));
    }

    #[test]
    fn from_json_map_rejects_values_above_one() {
        let mut map = to_map(&PredictionRequest::from_form(&QualificationForm::new()));
        map.insert("dynamic_goals".to_string(), json!(2));

        let err = PredictionRequest::from_json_map(&map).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("dynamic_goals", 0, 1, "2"));
    }

    #[test]
    fn from_json_map_requires_string_name() {
        let mut map = to_map(&PredictionRequest::from_form(&QualificationForm::new()));
        map.insert("use_case_name".to_string(), json!(42));
        assert!(PredictionRequest::from_json_map(&map).is_err());

        map.remove("use_case_name");
        assert_eq!(
            PredictionRequest::from_json_map(&map).unwrap_err(),
            ValidationError::missing_field("use_case_name")
        );
    }

    #[test]
    fn response_deserializes_from_service_json() {
        let response: PredictionResponse = serde_json::from_value(json!({
            "label": "Classical ML",
            "avg_confidence": 0.86,
            "lcl": 0.81,
            "ucl": 0.90
        }))
        .unwrap();

        assert_eq!(response.label, PredictionLabel::ClassicalMl);
        assert!((response.avg_confidence - 0.86).abs() < f64::EPSILON);
        assert!(response.anomalies().is_empty());
    }

    #[test]
    fn response_rejects_unknown_label() {
        let result = serde_json::from_value::<PredictionResponse>(json!({
            "label": "Quantum",
            "avg_confidence": 0.5,
            "lcl": 0.4,
            "ucl": 0.6
        }));
        assert!(result.is_err());
    }

    #[test]
    fn label_index_order_is_stable() {
        assert_eq!(PredictionLabel::from_index(0), Some(PredictionLabel::AgenticAi));
        assert_eq!(PredictionLabel::from_index(3), Some(PredictionLabel::BusinessAutomation));
        assert_eq!(PredictionLabel::from_index(4), None);
        for label in PredictionLabel::ALL {
            assert_eq!(PredictionLabel::from_index(label.index()), Some(label));
        }
    }

    #[test]
    fn label_serializes_to_display_name() {
        for label in PredictionLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.display_name()));
        }
    }

    #[test]
    fn anomalies_report_out_of_range_and_inverted_interval() {
        let response = PredictionResponse {
            label: PredictionLabel::GenAi,
            avg_confidence: 1.4,
            lcl: 0.9,
            ucl: 0.8,
        };
        let anomalies = response.anomalies();

        assert!(anomalies.contains(&ConfidenceAnomaly::OutOfRange {
            field: "avg_confidence",
            value: 1.4
        }));
        assert!(anomalies
            .iter()
            .any(|a| matches!(a, ConfidenceAnomaly::InvertedInterval { .. })));
    }

    proptest! {
        #[test]
        fn payload_always_has_sixteen_integer_fields(bits in prop::collection::vec(any::<bool>(), 15), name in ".*") {
            let mut form = QualificationForm::with_name(name);
            for (key, value) in ParameterKey::ALL.iter().zip(bits) {
                form.set_answer(*key, value);
            }
            let map = to_map(&PredictionRequest::from_form(&form));

            prop_assert_eq!(map.len(), 16);
            for key in ParameterKey::ALL {
                let value = map[key.as_str()].as_u64();
                prop_assert!(value == Some(0) || value == Some(1));
            }
        }
    }
}
