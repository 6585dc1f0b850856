mod parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use parser::load_config;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::errors::Error;

/// Configuration for the remote validation collaborator
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ValidatorConfig {
    /// URL of the remote validation endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Bound on the remote call as a humantime string (e.g. "30s", "2m")
    #[serde(default)]
    pub request_timeout: Option<String>,
    /// Whether to also log to a rotating file in addition to stdout
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            endpoint: default_endpoint(),
            request_timeout: None,
            log_to_file: false,
        }
    }
}

impl ValidatorConfig {
    /// Resolves the configured request timeout
    ///
    /// # Returns
    /// * `Result<Duration, Error>` - Parsed timeout, or the default when unset,
    ///   or a configuration error when the humantime string is invalid
    pub fn request_timeout(&self) -> Result<Duration, Error> {
        match &self.request_timeout {
            None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            Some(raw) => humantime::parse_duration(raw)
                .map_err(|e| Error::Config(format!("Invalid request_timeout '{}': {}", raw, e))),
        }
    }
}
