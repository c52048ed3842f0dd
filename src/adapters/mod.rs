//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Bundled prediction service (axum)
//! - `prediction` - Prediction service clients (reqwest, mock)
//! - `terminal` - Plain-text rendering for the CLI

pub mod http;
pub mod prediction;
pub mod terminal;

pub use prediction::{HttpPredictionClient, HttpPredictionConfig, MockPredictionService};
