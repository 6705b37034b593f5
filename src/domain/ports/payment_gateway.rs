//! Outbound collaborator port for payment intent creation.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

/// Client-side handle for completing a payment with the upstream processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct PaymentIntent {
    pub client_secret: String,
}

/// Failures raised by payment gateway adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The upstream processor could not be reached.
    #[error("payment gateway request failed: {message}")]
    Request { message: String },
    /// The upstream processor answered with an error.
    #[error("payment gateway rejected the intent: {message}")]
    Rejected { message: String },
}

impl GatewayError {
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment intent for `amount_cents` in USD.
    async fn create_intent(&self, amount_cents: i64) -> Result<PaymentIntent, GatewayError>;
}
