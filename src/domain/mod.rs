//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, percentages, state machines)
//! - `qualification` - Questionnaire, prediction contract, submission lifecycle, FAQ
//! - `scoring` - Heuristic classifier and Wilson intervals for the bundled service

pub mod foundation;
pub mod qualification;
pub mod scoring;
