//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PredictionService` - outbound prediction call made by the questionnaire
//! - `UseCaseClassifier` - scoring seam used by the bundled prediction service

mod prediction_service;
mod use_case_classifier;

pub use prediction_service::{PredictionError, PredictionService, GENERIC_FAILURE_MESSAGE};
pub use use_case_classifier::{Classification, UseCaseClassifier};
