//! Prediction Service Port - Interface for the external classifier.
//!
//! This port abstracts the single outbound call of the questionnaire: send a
//! [`PredictionRequest`], receive a [`PredictionResponse`]. The HTTP adapter,
//! test doubles and anything else that can answer a prediction implement it.
//!
//! # Error messages
//!
//! Every failure is a [`PredictionError`]. The message shown to users follows
//! a fixed precedence, see [`PredictionError::user_message`]:
//!
//! 1. the server's structured `detail` field
//! 2. the transport-level error text
//! 3. [`GENERIC_FAILURE_MESSAGE`]

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::qualification::{PredictionRequest, PredictionResponse};

/// Shown when a failure carries neither a server detail nor transport text.
pub const GENERIC_FAILURE_MESSAGE: &str = "Prediction failed. Please try again.";

/// Port for the external prediction service.
#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Requests one prediction. Implementations perform no retries.
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError>;
}

/// Uniform failure of a prediction call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// The call did not finish within the time bound.
    #[error("prediction timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection, DNS or other transport failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success status from the service.
    #[error("server error {status}")]
    Server {
        status: u16,
        /// Structured `detail` from the response body, if any.
        detail: Option<String>,
        /// Transport-level description of the failed response.
        message: Option<String>,
    },

    /// The service answered 2xx with a body that is not a valid response.
    #[error("malformed response: {0}")]
    MalformedBody(String),
}

impl PredictionError {
    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Server failure with a structured detail.
    pub fn server_detail(status: u16, detail: impl Into<String>) -> Self {
        Self::Server {
            status,
            detail: Some(detail.into()),
            message: Some(status_message(status)),
        }
    }

    /// Server failure without a structured detail.
    pub fn server_status(status: u16) -> Self {
        Self::Server {
            status,
            detail: None,
            message: Some(status_message(status)),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody(message.into())
    }

    /// The server's structured detail, if present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Transport-level description, if one exists.
    ///
    /// A timeout has none, so it surfaces the generic message.
    pub fn transport_message(&self) -> Option<&str> {
        let message = match self {
            Self::Timeout { .. } => None,
            Self::Transport(message) | Self::MalformedBody(message) => Some(message.as_str()),
            Self::Server { message, .. } => message.as_deref(),
        };
        message.filter(|m| !m.is_empty())
    }

    /// Message for the user: detail, then transport text, then the generic fallback.
    pub fn user_message(&self) -> String {
        self.detail()
            .filter(|d| !d.is_empty())
            .or_else(|| self.transport_message())
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_string()
    }
}

fn status_message(status: u16) -> String {
    format!("Request failed with status code {}", status)
}
