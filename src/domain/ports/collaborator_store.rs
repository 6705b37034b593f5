//! Pass-through persistence ports for collaborator documents.
//!
//! Payments and support tickets have no business invariants in this service;
//! they are stored and listed verbatim.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::StoreResult;

/// Record of a completed payment, stored as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub email: String,
    pub price: f64,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

/// Support ticket logged by an employee, stored as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub email: String,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Store a payment record and return its identifier.
    async fn insert(&self, record: &PaymentRecord) -> StoreResult<Uuid>;

    /// Most recent records for this email, capped at `limit`.
    async fn recent_by_email(&self, email: &str, limit: usize)
    -> StoreResult<Vec<PaymentRecord>>;
}

#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Store a ticket and return its identifier.
    async fn insert(&self, ticket: &Ticket) -> StoreResult<Uuid>;
}
