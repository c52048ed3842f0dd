//! Data transfer objects for the prediction service endpoints.
//!
//! The request body is decoded by
//! [`PredictionRequest::from_json_map`](crate::domain::qualification::PredictionRequest::from_json_map)
//! so the accepted field set always equals the parameter catalog. The success
//! body is [`PredictionResponse`](crate::domain::qualification::PredictionResponse)
//! itself.

use serde::{Deserialize, Serialize};

/// Health check body for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Error body: `{ "detail": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
