//! Axum router configuration for the prediction service.

use axum::{
    routing::{get, post},
    Router,
};
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, predict, PredictAppState};

/// Create the prediction API routes.
///
/// # Routes
///
/// - `GET /` - Health check
/// - `POST /predict` - Classify a use case
pub fn predict_routes() -> Router<PredictAppState> {
    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
}

/// Create the complete prediction service app with state, CORS and tracing.
///
/// An empty `cors_origins` list allows any origin.
pub fn predict_router(state: PredictAppState, cors_origins: &[String]) -> Router {
    predict_routes()
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
