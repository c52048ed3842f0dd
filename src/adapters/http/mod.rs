//! HTTP adapters - REST API implementations.

pub mod predict;

pub use predict::predict_router;
pub use predict::PredictAppState;
