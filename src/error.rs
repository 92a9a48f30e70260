//! Error types for the SasaPay client

use thiserror::Error;

/// Result type alias for SasaPay operations
pub type Result<T> = std::result::Result<T, SasaPayError>;

/// Boxed underlying cause carried by an error
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for SasaPay operations
#[derive(Error, Debug)]
pub enum SasaPayError {
    /// The token endpoint rejected the credentials, or the token could not be fetched
    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        status: Option<u16>,
        body: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// A business endpoint call failed
    #[error("Request error: {message}")]
    Request {
        message: String,
        status: Option<u16>,
        body: Option<String>,
        #[source]
        source: Option<BoxError>,
    },

    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SasaPayError {
    /// Create an authentication error from a message
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Create an authentication error wrapping an underlying cause
    pub fn authentication_with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Authentication {
            message: message.into(),
            status: None,
            body: None,
            source: Some(source.into()),
        }
    }

    /// Create an authentication error for a non-200 token response
    pub fn authentication_status(status: reqwest::StatusCode, body: Option<String>) -> Self {
        Self::Authentication {
            message: format!("auth request failed with status: {}", status),
            status: Some(status.as_u16()),
            body,
            source: None,
        }
    }

    /// Create a request error from a message
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Create a request error wrapping an underlying cause
    pub fn request_with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Request {
            message: message.into(),
            status: None,
            body: None,
            source: Some(source.into()),
        }
    }

    /// Create a request error for a non-200 business response
    pub fn request_status(status: reqwest::StatusCode, body: Option<String>) -> Self {
        Self::Request {
            message: format!("failed with status code: {}", status),
            status: Some(status.as_u16()),
            body,
            source: None,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status returned by the gateway, if the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Request { status, .. } => *status,
            Self::Config { .. } => None,
        }
    }

    /// Response body captured from a non-200 response
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Authentication { body, .. } | Self::Request { body, .. } => body.as_deref(),
            Self::Config { .. } => None,
        }
    }

    /// Whether this error happened while obtaining a token
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Whether this error happened during a business call
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }
}
