//! HTTP Prediction Client - Implementation of PredictionService over reqwest.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpPredictionConfig::new("https://qualify.example.com");
//! let client = HttpPredictionClient::new(config)?;
//!
//! let response = client.predict(&request).await?;
//! ```
//!
//! One `POST {base_url}/predict` per call, JSON in and out, hard-capped at
//! [`PREDICTION_TIMEOUT`]. No retries: the user re-submits manually.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

use crate::domain::qualification::{PredictionRequest, PredictionResponse};
use crate::ports::{PredictionError, PredictionService};

/// Upper bound on one prediction call.
pub const PREDICTION_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration for the HTTP prediction client.
#[derive(Debug, Clone)]
pub struct HttpPredictionConfig {
    /// Base URL of the prediction service, without the `/predict` suffix.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpPredictionConfig {
    /// Creates a configuration with the standard timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: PREDICTION_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the predict endpoint.
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }
}

/// reqwest-backed prediction client.
pub struct HttpPredictionClient {
    config: HttpPredictionConfig,
    client: Client,
}

impl HttpPredictionClient {
    /// Creates a client; fails only if the TLS backend cannot be initialised.
    pub fn new(config: HttpPredictionConfig) -> Result<Self, PredictionError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PredictionError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpPredictionConfig {
        &self.config
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> PredictionError {
        if e.is_timeout() {
            PredictionError::timeout(self.timeout_ms())
        } else {
            PredictionError::transport(e.to_string())
        }
    }

    /// Sends the request.
    async fn send_request(&self, request: &PredictionRequest) -> Result<Response, PredictionError> {
        self.client
            .post(self.config.predict_url())
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))
    }

    /// Turns the response into a prediction or a classified error.
    async fn parse_response(&self, response: Response) -> Result<PredictionResponse, PredictionError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(match extract_detail(&body) {
                Some(detail) => PredictionError::server_detail(status.as_u16(), detail),
                None => PredictionError::server_status(status.as_u16()),
            });
        }

        serde_json::from_str(&body).map_err(|e| match extract_detail(&body) {
            Some(detail) => PredictionError::server_detail(status.as_u16(), detail),
            None => PredictionError::malformed(format!("Failed to parse response: {}", e)),
        })
    }
}

/// Pulls the `detail` field out of an error body.
///
/// String details are returned as-is; structured ones (e.g. validation error
/// lists) are returned as compact JSON.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    match parsed.get("detail")? {
        Value::Null => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

#[async_trait]
impl PredictionService for HttpPredictionClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        tracing::debug!(
            url = %self.config.predict_url(),
            yes_count = request.answers().yes_count(),
            "Sending prediction request"
        );

        let result = match self.send_request(request).await {
            Ok(response) => self.parse_response(response).await,
            Err(err) => Err(err),
        };

        match &result {
            Ok(prediction) => tracing::debug!(label = %prediction.label, "Prediction received"),
            Err(err) => tracing::warn!(error = %err, "Prediction request failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_twenty_seconds() {
        let config = HttpPredictionConfig::new("http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(20));
    }

    #[test]
    fn predict_url_appends_path() {
        let config = HttpPredictionConfig::new("http://localhost:8000");
        assert_eq!(config.predict_url(), "http://localhost:8000/predict");
    }

    #[test]
    fn predict_url_strips_trailing_slashes() {
        let config = HttpPredictionConfig::new("https://api.example.com/v1//");
        assert_eq!(config.predict_url(), "https://api.example.com/v1/predict");
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = HttpPredictionConfig::new("http://x").with_timeout(Duration::from_millis(50));
        assert_eq!(config.timeout, Duration::from_millis(50));
    }

    #[test]
    fn extract_detail_reads_string_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "Model not loaded"}"#),
            Some("Model not loaded".to_string())
        );
    }

    #[test]
    fn extract_detail_serializes_structured_detail() {
        let detail = extract_detail(r#"{"detail": [{"loc": ["body"], "msg": "bad"}]}"#).unwrap();
        assert!(detail.contains("\"msg\":\"bad\""));
    }

    #[test]
    fn extract_detail_ignores_missing_or_null_detail() {
        assert_eq!(extract_detail(r#"{"error": "nope"}"#), None);
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
    }
}
