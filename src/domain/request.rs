//! Asset request records and their status machines.
//!
//! Two independent lifecycles live here: employee requests for catalog
//! assets (which couple to the inventory ledger on approval and return) and
//! custom requests for items outside the catalog (purely administrative).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::AssetType;

/// Status of an employee asset request.
///
/// Transitions: `Pending -> Approved`, `Pending -> Rejected`, and
/// `Approved -> Returned` for returnable assets only. `Rejected` and
/// `Returned` are terminal; `Approved` is terminal for non-returnable assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Returned,
}

/// Employee request for a catalog asset.
///
/// Snapshots the asset name and type at submission time so listings stay
/// stable if the catalog entry is edited, and carries `asset_id` so approval
/// can couple the status change with the ledger decrement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetRequest {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub asset_id: Uuid,
    pub asset_name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub user_name: String,
    pub user_email: String,
    /// Email of the owning admin.
    pub admin: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default = "Utc::now")]
    pub request_date: DateTime<Utc>,
    /// Set exactly once, on the `Pending -> Approved` transition.
    #[serde(default)]
    pub approve_date: Option<DateTime<Utc>>,
}

/// Status of a custom (non-catalog) request.
///
/// Transitions: `Pending -> Approved`, `Pending -> Rejected`. No stock or
/// quota linkage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CustomRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Employee request for an item that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomAssetRequest {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub user_name: Option<String>,
    pub email: String,
    /// Email of the owning admin.
    pub admin: String,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: CustomRequestStatus,
    #[serde(default = "Utc::now")]
    pub request_date: DateTime<Utc>,
}
