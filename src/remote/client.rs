use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::constants::NETWORK_ERROR_FALLBACK;
use crate::errors::Error;
use crate::remote::{ValidateRequest, ValidateResponse};

/// Remote collaborator performing the actual schema validation.
///
/// The orchestrator never interprets schema semantics itself; everything
/// behind this seam is opaque. Tests substitute their own implementor.
#[async_trait]
pub trait RemoteValidator: Debug + Send + Sync {
    async fn validate(&self, request: &ValidateRequest) -> Result<ValidateResponse, Error>;
}

/// HTTP implementation of the remote validation boundary
#[derive(Debug)]
pub struct HttpValidator {
    endpoint: Url,
    client: Client,
}

impl HttpValidator {
    /// Creates a validator posting to the given endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the validation endpoint
    /// * `timeout` - Bound on each request; exceeding it is a transport failure
    ///
    /// # Returns
    /// * `Result<Self, Error>` - The validator, or a configuration error for
    ///   an unparseable endpoint URL
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("Invalid endpoint URL '{}': {}", endpoint, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(HttpValidator { endpoint, client })
    }
}

#[async_trait]
impl RemoteValidator for HttpValidator {
    /// Posts both documents as raw text and interprets the response envelope
    ///
    /// # Returns
    /// * `Ok(ValidateResponse)` - For a 2xx response with a well-formed body
    /// * `Err(Error::Protocol)` - For a non-2xx status, with best-effort body text
    /// * `Err(Error::Transport)` - When no response was obtained or the body
    ///   could not be interpreted
    async fn validate(&self, request: &ValidateRequest) -> Result<ValidateResponse, Error> {
        debug!("Posting validation request to {}", self.endpoint);

        let res = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport(transport_message(&e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        res.json::<ValidateResponse>()
            .await
            .map_err(|e| Error::Transport(format!("Uninterpretable validation response: {}", e)))
    }
}

fn transport_message(error: &reqwest::Error) -> String {
    let message = error.to_string();
    if message.is_empty() {
        NETWORK_ERROR_FALLBACK.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_endpoint_urls_are_rejected_at_construction() {
        let result = HttpValidator::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn valid_endpoint_urls_are_accepted() {
        let validator =
            HttpValidator::new("http://localhost:8000/validate", Duration::from_secs(30));
        assert!(validator.is_ok());
    }
}
