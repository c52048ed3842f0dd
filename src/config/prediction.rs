//! Prediction endpoint configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::environment::Environment;

/// Where the questionnaire sends its answers.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    /// Base URL of the prediction service (`/predict` is appended)
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl PredictionConfig {
    /// Validate prediction configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("PREDICTION__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidPredictionUrl);
        }
        if environment.requires_https() && !self.base_url.starts_with("https://") {
            return Err(ValidationError::PredictionUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
