//! Prediction Service Adapters.
//!
//! Implementations of the PredictionService port.
//!
//! ## Available Adapters
//!
//! - `HttpPredictionClient` - JSON over HTTP to the configured endpoint
//! - `MockPredictionService` - Scripted outcomes for testing

mod http_client;
mod mock_service;

pub use http_client::{HttpPredictionClient, HttpPredictionConfig, PREDICTION_TIMEOUT};
pub use mock_service::MockPredictionService;
