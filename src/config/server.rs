//! Bundled prediction service settings

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

use super::environment::Environment;
use super::error::ValidationError;

/// Listener, logging and CORS settings for `qualify-tool serve`.
///
/// Missing keys fall back to [`ServerConfig::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    /// Comma-separated; unset or empty allows any origin
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            environment: Environment::Development,
            log_level: "info,qualify_tool=debug".to_string(),
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Listener address. The host must be a literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self.host.parse().map_err(|_| ValidationError::InvalidHost)?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn is_production(&self) -> bool {
        self.environment.requires_https()
    }

    /// Configured CORS origins, blanks dropped.
    pub fn allowed_origins(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr().map(|_| ())
    }
}
