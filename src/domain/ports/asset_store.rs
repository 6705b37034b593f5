//! Port abstraction for inventory ledger persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Asset, AssetType};

use super::{StoreResult, UpdateReceipt};

/// AND-composed filter over catalog assets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFilter {
    /// Match assets owned by this admin's email.
    pub admin: Option<String>,
    pub asset_type: Option<AssetType>,
    /// Case-insensitive substring match on the asset name.
    pub name_contains: Option<String>,
    /// Match assets with quantity strictly below this threshold.
    pub quantity_below: Option<u32>,
}

/// Outcome of a guarded stock decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    /// Quantity was positive and has been decremented by one.
    Adjusted,
    /// The document matched but quantity was already zero; nothing changed.
    OutOfStock,
    /// No document with that id exists.
    Missing,
}

#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store an asset document and return its identifier.
    async fn insert(&self, asset: &Asset) -> StoreResult<Uuid>;

    /// Fetch an asset by id.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Asset>>;

    /// List assets matching the filter.
    async fn list(&self, filter: AssetFilter) -> StoreResult<Vec<Asset>>;

    /// Decrement quantity by one, but only while it is above zero.
    ///
    /// This is a single conditional update against the store; it is the only
    /// decrement path, which is what keeps quantity non-negative under
    /// concurrent approvals.
    async fn decrement_if_available(&self, id: Uuid) -> StoreResult<StockAdjustment>;

    /// Increment quantity by one (return of a returnable asset).
    async fn increment(&self, id: Uuid) -> StoreResult<UpdateReceipt>;
}
