//! Example: request a C2B payment and confirm it with the customer's code
//!
//! Reads `SASAPAY_CLIENT_ID`, `SASAPAY_CLIENT_SECRET`, `SASAPAY_ENVIRONMENT`,
//! `SASAPAY_MERCHANT_CODE` and `SASAPAY_PHONE_NUMBER` from the environment.

use sasapay::{network_codes, ClientConfig, PaymentRequest, ProcessPaymentRequest, SasaPayClient};
use std::env;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sasapay=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ClientConfig::from_env();
    println!("Using {} environment", config.credentials.environment);
    let client = SasaPayClient::with_config(config)?;

    let merchant_code = env::var("SASAPAY_MERCHANT_CODE")?;
    let request = PaymentRequest {
        merchant_code: merchant_code.clone(),
        network_code: network_codes::SASAPAY.to_string(),
        transaction_fee: 0,
        currency: "KES".to_string(),
        amount: "1".to_string(),
        callback_url: "https://example.com/sasapay/callback".to_string(),
        phone_number: env::var("SASAPAY_PHONE_NUMBER")?,
        transaction_desc: "Demo payment".to_string(),
        account_reference: "DEMO-1".to_string(),
    };

    let response = client.request_payment(&request).await?;
    println!("Payment requested: {}", response.customer_message);
    println!("  CheckoutRequestID: {}", response.checkout_request_id);

    if !response.status {
        println!("Gateway declined the request: {}", response.detail);
        return Ok(());
    }

    println!("Enter the verification code sent to the customer:");
    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;

    let confirmed = client
        .process_payment(&ProcessPaymentRequest::new(
            response.checkout_request_id,
            merchant_code,
            code.trim(),
        ))
        .await?;
    println!("Process payment: status={} detail={}", confirmed.status, confirmed.detail);

    Ok(())
}
