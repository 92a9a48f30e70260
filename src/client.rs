//! Authenticated HTTP client for the SasaPay gateway

use crate::cache::TokenCache;
use crate::config::ClientConfig;
use crate::types::{endpoints, AuthResponse, Credentials};
use crate::{Result, SasaPayError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use http::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

/// HTTP client that obtains, caches and attaches a bearer token to every call
#[derive(Clone)]
pub struct SasaPayClient {
    /// Underlying HTTP client
    client: Client,
    credentials: Credentials,
    base_url: String,
    token_cache: TokenCache,
}

impl std::fmt::Debug for SasaPayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SasaPayClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl SasaPayClient {
    /// Create a client for the environment named in `credentials`
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SasaPayError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.resolved_base_url(),
            credentials: config.credentials,
            token_cache: TokenCache::new(),
        })
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the credentials this client authenticates with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Absolute URL for a gateway path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Return a cached bearer token, fetching a new one on a miss.
    ///
    /// The token is kept for [`crate::cache::TOKEN_TTL`]; the `expires_in`
    /// value sent by the gateway is not consulted.
    pub async fn get_auth_token(&self) -> Result<String> {
        if let Some(token) = self.token_cache.get() {
            debug!("using cached auth token");
            return Ok(token);
        }

        let url = self.endpoint_url(endpoints::AUTH_TOKEN);
        debug!(url = %url, "fetching auth token");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.basic_auth_header())
            .send()
            .await
            .map_err(|e| {
                SasaPayError::authentication_with_source("failed to execute auth request", e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "auth request rejected");
            let body = error_body(response).await;
            return Err(SasaPayError::authentication_status(status, body));
        }

        let auth_response: AuthResponse = response
            .json()
            .await
            .map_err(|e| SasaPayError::authentication_with_source("failed to decode response", e))?;

        self.token_cache.insert(auth_response.access_token.clone());
        debug!(
            expires_in = auth_response.expires_in,
            ttl_secs = self.token_cache.ttl().as_secs(),
            "cached auth token"
        );

        Ok(auth_response.access_token)
    }

    /// Drop the cached token so the next call authenticates again
    pub fn invalidate_token(&self) {
        self.token_cache.clear();
    }

    /// Send an authenticated JSON request and return the raw response body.
    ///
    /// `None` sends an empty body. Anything but `200 OK` is an error and the
    /// body is only kept as diagnostic text on the error.
    pub async fn make_request<T>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&T>,
    ) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let token = self.get_auth_token().await?;

        let body = match payload {
            Some(payload) => serde_json::to_vec(payload)
                .map_err(|e| SasaPayError::request_with_source("failed to marshal payload", e))?,
            None => Vec::new(),
        };

        let url = self.endpoint_url(path);
        debug!(%method, url = %url, "sending request");

        let response = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SasaPayError::request_with_source("failed to execute request", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, url = %url, "request rejected");
            let body = error_body(response).await;
            return Err(SasaPayError::request_status(status, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SasaPayError::request_with_source("failed to read response body", e))?;

        Ok(bytes.to_vec())
    }

    fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.credentials.client_id, self.credentials.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[cfg(test)]
    pub(crate) fn with_token_cache(mut self, token_cache: TokenCache) -> Self {
        self.token_cache = token_cache;
        self
    }
}

async fn error_body(response: Response) -> Option<String> {
    response.text().await.ok().filter(|text| !text.is_empty())
}
