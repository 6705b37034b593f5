//! Payment gateway adapters.
//!
//! The HTTP adapter owns transport details only: form encoding, timeout, and
//! error mapping onto the gateway port. The fixture adapter backs tests and
//! deployments without a configured processor.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::{GatewayError, PaymentGateway, PaymentIntent};

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct IntentResponseDto {
    client_secret: String,
}

/// Gateway adapter performing HTTP POST requests against one processor
/// endpoint with a bearer secret key.
pub struct HttpPaymentGateway {
    client: Client,
    endpoint: String,
    secret_key: String,
}

impl HttpPaymentGateway {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: String, secret_key: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(DEFAULT_REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint,
            secret_key,
        })
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_intent(&self, amount_cents: i64) -> Result<PaymentIntent, GatewayError> {
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", "usd".to_owned()),
            ("payment_method_types[]", "card".to_owned()),
        ];
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|err| GatewayError::request(err.to_string()))?;
        if !response.status().is_success() {
            return Err(GatewayError::rejected(format!(
                "processor answered {}",
                response.status()
            )));
        }
        let dto: IntentResponseDto = response
            .json()
            .await
            .map_err(|err| GatewayError::request(format!("malformed intent response: {err}")))?;
        Ok(PaymentIntent {
            client_secret: dto.client_secret,
        })
    }
}

/// Deterministic gateway for tests and processor-less deployments.
pub struct FixturePaymentGateway;

#[async_trait]
impl PaymentGateway for FixturePaymentGateway {
    async fn create_intent(&self, amount_cents: i64) -> Result<PaymentIntent, GatewayError> {
        Ok(PaymentIntent {
            client_secret: format!("pi_fixture_secret_{amount_cents}"),
        })
    }
}
