//! Port abstraction for custom (non-catalog) request persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CustomAssetRequest, CustomRequestStatus};

use super::{StoreResult, UpdateReceipt};

#[async_trait]
pub trait CustomRequestStore: Send + Sync {
    /// Store a custom request document and return its identifier.
    async fn insert(&self, request: &CustomAssetRequest) -> StoreResult<Uuid>;

    /// Custom requests owned by this admin's email.
    async fn list_by_admin(&self, admin: &str) -> StoreResult<Vec<CustomAssetRequest>>;

    /// Custom requests submitted by this requester's email.
    async fn list_by_email(&self, email: &str) -> StoreResult<Vec<CustomAssetRequest>>;

    /// Conditionally move a custom request from `from` to `to`.
    ///
    /// Filter is `{id, status == from}`; anything else acknowledges with a
    /// zero-effect receipt, which is what makes decision retries safe.
    async fn transition(
        &self,
        id: Uuid,
        from: CustomRequestStatus,
        to: CustomRequestStatus,
    ) -> StoreResult<UpdateReceipt>;
}
