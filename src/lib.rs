//! # sasapay - SasaPay payment gateway client
//!
//! A Rust client for the SasaPay mobile-money gateway. The client authenticates
//! with OAuth client credentials, keeps the bearer token in a per-client cache
//! and exposes the customer-to-business payment calls.
//!
//! ```no_run
//! use sasapay::{network_codes, Credentials, PaymentRequest, SasaPayClient};
//!
//! # async fn run() -> sasapay::Result<()> {
//! let client = SasaPayClient::new(Credentials::new("client-id", "client-secret", "sandbox"))?;
//!
//! let response = client
//!     .request_payment(&PaymentRequest {
//!         merchant_code: "600980".to_string(),
//!         network_code: network_codes::MPESA.to_string(),
//!         currency: "KES".to_string(),
//!         amount: "10".to_string(),
//!         phone_number: "254700000000".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("checkout request: {}", response.checkout_request_id);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod payments;
pub mod types;

// Re-exports for convenience
pub use client::SasaPayClient;
pub use config::ClientConfig;
pub use error::{Result, SasaPayError};
pub use types::*;

/// Current version of the sasapay library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(
            endpoints::AUTH_TOKEN,
            "/v1/auth/token/?grant_type=client_credentials"
        );
        assert_eq!(endpoints::REQUEST_PAYMENT, "/v1/payments/request-payment/");
        assert_eq!(endpoints::PROCESS_PAYMENT, "/v1/payments/process-payment/");
    }

    #[test]
    fn test_reexports() {
        let credentials = Credentials::new("id", "secret", Environment::Production);
        let config = ClientConfig::new(credentials);
        let client = SasaPayClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), PRODUCTION_BASE_URL);
        assert_eq!(client.credentials().environment, Environment::Production);
    }
}
