//! Core types for the SasaPay API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnNull};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Production API host
pub const PRODUCTION_BASE_URL: &str = "https://api.sasapay.app/api";

/// Sandbox API host
pub const SANDBOX_BASE_URL: &str = "https://sandbox.sasapay.app/api";

/// Deployment environment of the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Get the environment tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }

    /// Get the API base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Only the exact tag `production` selects the production host; anything
/// else, including typos and the empty string, falls back to sandbox.
impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for Environment {
    fn from(s: &str) -> Self {
        if s == "production" {
            Environment::Production
        } else {
            Environment::Sandbox
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API credentials issued by SasaPay
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth client identifier
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Target environment
    pub environment: Environment,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}

impl Credentials {
    /// Create a new set of credentials
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        environment: impl Into<Environment>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            environment: environment.into(),
        }
    }

    /// Read credentials from `SASAPAY_CLIENT_ID`, `SASAPAY_CLIENT_SECRET` and
    /// `SASAPAY_ENVIRONMENT`. Missing variables become empty strings; the
    /// client is still built and fails with an authentication error on the
    /// first call.
    pub fn from_env() -> Self {
        use std::env;

        let client_id = env::var("SASAPAY_CLIENT_ID").unwrap_or_default();
        let client_secret = env::var("SASAPAY_CLIENT_SECRET").unwrap_or_default();
        let environment = env::var("SASAPAY_ENVIRONMENT").unwrap_or_default();

        Self::new(client_id, client_secret, environment.as_str())
    }
}

/// Token endpoint response
///
/// Missing and `null` fields decode to their defaults.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    /// Gateway status flag (sent as either a string or a boolean)
    pub status: Option<Value>,
    #[serde_as(as = "DefaultOnNull")]
    pub detail: String,
    #[serde_as(as = "DefaultOnNull")]
    pub access_token: String,
    /// Server-declared lifetime in seconds. Not used for caching.
    #[serde_as(as = "DefaultOnNull")]
    pub expires_in: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub token_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub scope: String,
}

/// Customer-to-business payment request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    #[serde(rename = "MerchantCode")]
    pub merchant_code: String,
    /// Wallet network, see [`network_codes`]
    #[serde(rename = "NetworkCode")]
    pub network_code: String,
    #[serde(rename = "Transaction Fee")]
    pub transaction_fee: i64,
    #[serde(rename = "Currency")]
    pub currency: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "CallBackURL")]
    pub callback_url: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "TransactionDesc")]
    pub transaction_desc: String,
    #[serde(rename = "AccountReference")]
    pub account_reference: String,
}

/// Customer-to-business payment response
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentResponse {
    #[serde_as(as = "DefaultOnNull")]
    pub status: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub detail: String,
    #[serde(rename = "PaymentGateway")]
    #[serde_as(as = "DefaultOnNull")]
    pub payment_gateway: String,
    #[serde(rename = "MerchantRequestID")]
    #[serde_as(as = "DefaultOnNull")]
    pub merchant_request_id: String,
    #[serde(rename = "CheckoutRequestID")]
    #[serde_as(as = "DefaultOnNull")]
    pub checkout_request_id: String,
    #[serde(rename = "TransactionReference")]
    #[serde_as(as = "DefaultOnNull")]
    pub transaction_reference: String,
    #[serde(rename = "ResponseCode")]
    #[serde_as(as = "DefaultOnNull")]
    pub response_code: String,
    #[serde(rename = "ResponseDescription")]
    #[serde_as(as = "DefaultOnNull")]
    pub response_description: String,
    #[serde(rename = "CustomerMessage")]
    #[serde_as(as = "DefaultOnNull")]
    pub customer_message: String,
}

/// Confirms a pending payment with the code the customer received
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessPaymentRequest {
    #[serde(rename = "CheckoutRequestID")]
    pub checkout_request_id: String,
    #[serde(rename = "MerchantCode")]
    pub merchant_code: String,
    #[serde(rename = "VerificationCode")]
    pub verification_code: String,
}

impl ProcessPaymentRequest {
    /// Create a new process-payment request
    pub fn new(
        checkout_request_id: impl Into<String>,
        merchant_code: impl Into<String>,
        verification_code: impl Into<String>,
    ) -> Self {
        Self {
            checkout_request_id: checkout_request_id.into(),
            merchant_code: merchant_code.into(),
            verification_code: verification_code.into(),
        }
    }
}

/// Process-payment response
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessPaymentResponse {
    #[serde_as(as = "DefaultOnNull")]
    pub status: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub detail: String,
}

/// Gateway endpoint paths, relative to the environment base URL
pub mod endpoints {
    /// Token issuance
    pub const AUTH_TOKEN: &str = "/v1/auth/token/?grant_type=client_credentials";
    /// Initiate a C2B payment
    pub const REQUEST_PAYMENT: &str = "/v1/payments/request-payment/";
    /// Confirm a pending payment
    pub const PROCESS_PAYMENT: &str = "/v1/payments/process-payment/";
}

/// Wallet network codes accepted in [`PaymentRequest::network_code`]
pub mod network_codes {
    /// SasaPay wallet
    pub const SASAPAY: &str = "0";
    /// M-Pesa
    pub const MPESA: &str = "63902";
    /// Airtel Money
    pub const AIRTEL_MONEY: &str = "63903";
    /// T-Kash
    pub const TKASH: &str = "63907";

    /// Check if a network code is one the gateway knows
    pub fn is_supported(code: &str) -> bool {
        matches!(code, SASAPAY | MPESA | AIRTEL_MONEY | TKASH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from("production"), Environment::Production);
        assert_eq!(Environment::from("sandbox"), Environment::Sandbox);
        assert_eq!(Environment::from(""), Environment::Sandbox);
        assert_eq!(Environment::from("Production"), Environment::Sandbox);
        assert_eq!(Environment::from("prod"), Environment::Sandbox);
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(Environment::default(), Environment::Sandbox);
    }

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Production.base_url(), "https://api.sasapay.app/api");
        assert_eq!(Environment::Sandbox.base_url(), "https://sandbox.sasapay.app/api");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("client-id", "very-secret", "sandbox");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("client-id"));
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_payment_request_wire_keys() {
        let request = PaymentRequest {
            merchant_code: "600980".to_string(),
            network_code: network_codes::MPESA.to_string(),
            transaction_fee: 0,
            currency: "KES".to_string(),
            amount: "1".to_string(),
            callback_url: "https://example.com/callback".to_string(),
            phone_number: "254700000000".to_string(),
            transaction_desc: "Order 42".to_string(),
            account_reference: "ACC-42".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 9);
        assert_eq!(object["Transaction Fee"], json!(0));
        assert!(!object.contains_key("TransactionFee"));
        assert_eq!(object["MerchantCode"], json!("600980"));
        assert_eq!(object["NetworkCode"], json!("63902"));
        assert_eq!(object["CallBackURL"], json!("https://example.com/callback"));
        assert_eq!(object["AccountReference"], json!("ACC-42"));

        let encoded = serde_json::to_string(&request).unwrap();
        assert!(encoded.contains("\"Transaction Fee\":0"));
    }

    #[test]
    fn test_payment_response_decodes_all_fields() {
        let body = json!({
            "status": true,
            "detail": "Request ID: 1234",
            "PaymentGateway": "M-PESA",
            "MerchantRequestID": "5f9a-11",
            "CheckoutRequestID": "ws_CO_1",
            "TransactionReference": "TRX001",
            "ResponseCode": "0",
            "ResponseDescription": "Success. Request accepted for processing",
            "CustomerMessage": "Success. Request accepted for processing"
        });

        let response: PaymentResponse = serde_json::from_value(body).unwrap();
        assert!(response.status);
        assert_eq!(response.detail, "Request ID: 1234");
        assert_eq!(response.payment_gateway, "M-PESA");
        assert_eq!(response.merchant_request_id, "5f9a-11");
        assert_eq!(response.checkout_request_id, "ws_CO_1");
        assert_eq!(response.transaction_reference, "TRX001");
        assert_eq!(response.response_code, "0");
        assert_eq!(response.response_description, "Success. Request accepted for processing");
        assert_eq!(response.customer_message, "Success. Request accepted for processing");
    }

    #[test]
    fn test_auth_response_tolerates_missing_fields() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"access_token":"abc123","expires_in":60}"#).unwrap();
        assert_eq!(response.access_token, "abc123");
        assert_eq!(response.expires_in, 60);
        assert!(response.status.is_none());
        assert_eq!(response.token_type, "");

        let response: AuthResponse = serde_json::from_str(
            r#"{"status":true,"detail":"SUCCESS","access_token":"t","expires_in":3600,"token_type":"Bearer","scope":"read"}"#,
        )
        .unwrap();
        assert_eq!(response.status, Some(json!(true)));
        assert_eq!(response.token_type, "Bearer");
    }

    #[test]
    fn test_auth_response_null_fields_default() {
        let response: AuthResponse = serde_json::from_str(
            r#"{"status":null,"detail":null,"access_token":"abc123","expires_in":null,"token_type":null,"scope":null}"#,
        )
        .unwrap();
        assert!(response.status.is_none());
        assert_eq!(response.access_token, "abc123");
        assert_eq!(response.expires_in, 0);
        assert_eq!(response.detail, "");
        assert_eq!(response.scope, "");
    }

    #[test]
    fn test_payment_response_null_fields_default() {
        let response: PaymentResponse = serde_json::from_value(json!({
            "status": null,
            "detail": "Request ID: abc",
            "PaymentGateway": null,
            "MerchantRequestID": null,
            "CheckoutRequestID": "co-1",
            "TransactionReference": null,
            "ResponseCode": "0",
            "ResponseDescription": null,
            "CustomerMessage": null
        }))
        .unwrap();

        assert!(!response.status);
        assert_eq!(response.checkout_request_id, "co-1");
        assert_eq!(response.transaction_reference, "");
        assert_eq!(response.payment_gateway, "");
        assert_eq!(response.customer_message, "");
    }

    #[test]
    fn test_process_payment_response_null_fields_default() {
        let response: ProcessPaymentResponse =
            serde_json::from_str(r#"{"status":false,"detail":null}"#).unwrap();
        assert_eq!(response, ProcessPaymentResponse::default());

        let response: ProcessPaymentResponse =
            serde_json::from_str(r#"{"status":null,"detail":"Invalid code"}"#).unwrap();
        assert!(!response.status);
        assert_eq!(response.detail, "Invalid code");
    }

    #[test]
    fn test_network_codes() {
        assert!(network_codes::is_supported("0"));
        assert!(network_codes::is_supported("63902"));
        assert!(network_codes::is_supported("63903"));
        assert!(network_codes::is_supported("63907"));
        assert!(!network_codes::is_supported("63904"));
    }

    #[test]
    fn test_process_payment_request() {
        let request = ProcessPaymentRequest::new("ws_CO_1", "600980", "123456");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "CheckoutRequestID": "ws_CO_1",
                "MerchantCode": "600980",
                "VerificationCode": "123456"
            })
        );
    }
}
