//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `QUALIFY_TOOL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use qualify_tool::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Predictions go to {}", config.prediction.base_url);
//! ```

mod environment;
mod error;
mod prediction;
mod server;

pub use error::{ConfigError, ValidationError};
pub use prediction::PredictionConfig;
pub use environment::Environment;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Prediction endpoint used by the questionnaire
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Bundled prediction service and logging
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `QUALIFY_TOOL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `QUALIFY_TOOL__PREDICTION__BASE_URL=https://...` -> `prediction.base_url`
    /// - `QUALIFY_TOOL__SERVER__PORT=8000` -> `server.port = 8000`
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QUALIFY_TOOL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.prediction.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("QUALIFY_TOOL__PREDICTION__BASE_URL");
        env::remove_var("QUALIFY_TOOL__SERVER__PORT");
        env::remove_var("QUALIFY_TOOL__SERVER__ENVIRONMENT");
    }

    #[test]
    fn test_load_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.prediction.base_url, "http://localhost:8000");
        assert_eq!(config.server.port, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_prediction_url_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("QUALIFY_TOOL__PREDICTION__BASE_URL", "https://models.example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.prediction.base_url, "https://models.example.com");
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("QUALIFY_TOOL__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_production_rejects_plain_http_endpoint() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("QUALIFY_TOOL__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::PredictionUrlMustBeHttps)
        );
    }
}
