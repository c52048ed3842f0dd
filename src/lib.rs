//! Qualify Tool - AI use-case qualification questionnaire
//!
//! Collects fifteen yes/no answers about a prospective use case, sends them to
//! a prediction service, and presents the recommended solution category with
//! its confidence interval. A heuristic reference service is bundled for local
//! use.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
