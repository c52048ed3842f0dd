//! Scoring used by the bundled prediction service.
//!
//! - `heuristic` - rule-based label selection when no trained model is loaded
//! - `interval` - Wilson score confidence interval

mod heuristic;
mod interval;

pub use heuristic::{HeuristicClassifier, HEURISTIC_PROBABILITY};
pub use interval::{wilson_interval, ConfidenceInterval};
