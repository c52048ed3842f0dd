//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, the state machine trait, and error types
//! used across the qualification domain.

mod errors;
mod percentage;
mod state_machine;

pub use errors::ValidationError;
pub use percentage::{format_fraction, Percentage};
pub use state_machine::StateMachine;
