//! Client configuration

use crate::types::Credentials;
use crate::{Result, SasaPayError};
use std::time::Duration;
use url::Url;

/// Overall deadline applied to every outbound call, including the token fetch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`crate::SasaPayClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials and environment
    pub credentials: Credentials,
    /// Per-request timeout
    pub timeout: Duration,
    /// Replaces the environment-selected base URL (mock servers, proxies)
    pub base_url: Option<String>,
}

impl ClientConfig {
    /// Create a new client config
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }

    /// Create a config from `SASAPAY_*` environment variables
    pub fn from_env() -> Self {
        Self::new(Credentials::from_env())
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Base URL requests are sent to, without a trailing slash
    pub fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => self.credentials.environment.base_url().to_string(),
        }
    }

    /// Validate the client configuration.
    ///
    /// Credentials are not checked here; the token endpoint rejects bad ones.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(SasaPayError::config("Timeout must be greater than zero"));
        }

        if let Some(base_url) = &self.base_url {
            let parsed = Url::parse(base_url)
                .map_err(|e| SasaPayError::config(format!("Invalid base URL: {e}")))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(SasaPayError::config(
                    "Base URL must start with http:// or https://",
                ));
            }
        }

        Ok(())
    }
}
