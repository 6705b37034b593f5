//! Inventory ledger asset records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Whether an approved request for this asset can later be returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AssetType {
    #[serde(rename = "returnable")]
    Returnable,
    #[serde(rename = "non-returnable")]
    NonReturnable,
}

/// Catalog entry owned by a single admin.
///
/// ## Invariants
/// - `quantity` is unsigned and only ever mutated through the ledger's
///   guarded decrement and restock operations, so it cannot go negative even
///   under concurrent approvals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub asset_name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub quantity: u32,
    /// Email of the owning admin.
    pub admin: String,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}
