//! HTTP handlers for the prediction service.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::domain::qualification::{PredictionRequest, PredictionResponse};
use crate::domain::scoring::wilson_interval;
use crate::ports::UseCaseClassifier;

use super::dto::{ErrorResponse, HealthResponse};

/// Application state for the prediction endpoints.
#[derive(Clone)]
pub struct PredictAppState {
    /// Scoring model (injected)
    pub classifier: Arc<dyn UseCaseClassifier>,
}

impl PredictAppState {
    pub fn new(classifier: Arc<dyn UseCaseClassifier>) -> Self {
        Self { classifier }
    }
}

/// Liveness check.
///
/// GET /
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { ok: true })
}

/// Classify one use case.
///
/// POST /predict
pub async fn predict(
    State(state): State<PredictAppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let request = match PredictionRequest::from_json_map(&body) {
        Ok(request) => request,
        Err(err) => return unprocessable(err.to_string()),
    };

    let classification = state.classifier.classify(request.answers());
    let interval = wilson_interval(classification.probability);

    tracing::info!(
        use_case = %request.use_case_name(),
        classifier = state.classifier.name(),
        label = %classification.label,
        confidence = classification.probability,
        "Prediction served"
    );

    Json(PredictionResponse {
        label: classification.label,
        avg_confidence: classification.probability,
        ucl: interval.ucl,
        lcl: interval.lcl,
    })
    .into_response()
}

fn unprocessable(detail: impl Into<String>) -> Response {
    let detail = detail.into();
    tracing::debug!(%detail, "Rejected prediction request");
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse::new(detail))).into_response()
}
