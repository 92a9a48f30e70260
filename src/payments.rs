//! Customer-to-business payment operations

use crate::client::SasaPayClient;
use crate::types::{
    endpoints, PaymentRequest, PaymentResponse, ProcessPaymentRequest, ProcessPaymentResponse,
};
use crate::{Result, SasaPayError};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

impl SasaPayClient {
    /// Ask a customer to pay a merchant from their mobile wallet.
    ///
    /// Use [`crate::network_codes::SASAPAY`] for SasaPay wallets, or the
    /// M-Pesa, Airtel Money and T-Kash codes for other networks.
    pub async fn request_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        self.post_json(endpoints::REQUEST_PAYMENT, request).await
    }

    /// Complete a pending payment with the customer's verification code
    pub async fn process_payment(
        &self,
        request: &ProcessPaymentRequest,
    ) -> Result<ProcessPaymentResponse> {
        self.post_json(endpoints::PROCESS_PAYMENT, request).await
    }

    async fn post_json<Req, Res>(&self, path: &str, request: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let body = self.make_request(Method::POST, path, Some(request)).await?;
        serde_json::from_slice(&body)
            .map_err(|e| SasaPayError::request_with_source("failed to parse the json", e))
    }
}
