//! Mock Prediction Service for testing.
//!
//! Provides a configurable implementation of the PredictionService port so
//! tests and offline demos run without a real prediction endpoint.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated latency
//! - Error injection
//! - Call capture for payload assertions
//!
//! # Example
//!
//! ```ignore
//! let service = MockPredictionService::new()
//!     .with_response(PredictionResponse { /* ... */ })
//!     .with_error(PredictionError::timeout(20_000));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::qualification::{PredictionRequest, PredictionResponse};
use crate::ports::{PredictionError, PredictionService};

/// Scripted prediction service.
#[derive(Debug, Clone, Default)]
pub struct MockPredictionService {
    /// Scripted outcomes, consumed in order.
    outcomes: Arc<Mutex<VecDeque<Result<PredictionResponse, PredictionError>>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Requests received, for verification.
    calls: Arc<Mutex<Vec<PredictionRequest>>>,
}

impl MockPredictionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, response: PredictionResponse) -> Self {
        self.push(Ok(response));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: PredictionError) -> Self {
        self.push(Err(error));
        self
    }

    /// Sets a delay applied before every answer.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<PredictionRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    fn push(&self, outcome: Result<PredictionResponse, PredictionError>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }
}

#[async_trait]
impl PredictionService for MockPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front())
            .unwrap_or_else(|| Err(PredictionError::transport("No mock response configured")))
    }
}
