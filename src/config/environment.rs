//! Deployment environment

use serde::Deserialize;

/// Where the process is running. Only production changes behaviour: the
/// prediction endpoint must then be served over HTTPS.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn requires_https(self) -> bool {
        self == Environment::Production
    }
}
