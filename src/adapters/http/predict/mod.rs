//! Prediction HTTP adapter - the bundled reference prediction service.
//!
//! Provides endpoints for:
//! - Health checks
//! - Classifying a filled-in questionnaire

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::PredictAppState;
pub use routes::{predict_router, predict_routes};
