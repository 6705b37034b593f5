//! Inventory ledger service: catalog assets and the stock guard.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::ports::{AssetFilter, AssetStore, InsertReceipt, StockAdjustment, UpdateReceipt};
use crate::domain::{Asset, Error};

/// Quantity below which an asset counts as limited stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Owns catalog assets. The only quantity mutations are the guarded
/// reservation taken on request approval and the restock taken on return.
pub struct InventoryLedger {
    assets: Arc<dyn AssetStore>,
}

impl InventoryLedger {
    pub fn new(assets: Arc<dyn AssetStore>) -> Self {
        Self { assets }
    }

    /// Record a new catalog entry.
    pub async fn add(&self, asset: &Asset) -> Result<InsertReceipt, Error> {
        let id = self.assets.insert(asset).await?;
        Ok(InsertReceipt::inserted(id))
    }

    /// List assets matching an AND-composed filter.
    pub async fn search(&self, filter: AssetFilter) -> Result<Vec<Asset>, Error> {
        Ok(self.assets.list(filter).await?)
    }

    /// An admin's assets with quantity under [`LOW_STOCK_THRESHOLD`].
    pub async fn list_low_stock(&self, admin_email: &str) -> Result<Vec<Asset>, Error> {
        let filter = AssetFilter {
            admin: Some(admin_email.to_owned()),
            quantity_below: Some(LOW_STOCK_THRESHOLD),
            ..AssetFilter::default()
        };
        Ok(self.assets.list(filter).await?)
    }

    /// Take one unit of stock for an approval.
    ///
    /// Exhausted stock is a distinct `out_of_stock` failure so approvals can
    /// surface it instead of silently driving the figure negative.
    pub async fn reserve(&self, asset_id: Uuid) -> Result<(), Error> {
        match self.assets.decrement_if_available(asset_id).await? {
            StockAdjustment::Adjusted => Ok(()),
            StockAdjustment::OutOfStock => Err(Error::out_of_stock("asset is out of stock")),
            StockAdjustment::Missing => Err(Error::not_found("asset no longer exists")),
        }
    }

    /// Put one unit of stock back (return of a returnable asset, or the
    /// compensation for a lost approval race).
    pub async fn restock(&self, asset_id: Uuid) -> Result<UpdateReceipt, Error> {
        Ok(self.assets.increment(asset_id).await?)
    }
}
