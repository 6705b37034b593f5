//! Port abstraction for employee asset request persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{AssetRequest, AssetType, RequestStatus};

use super::{StoreResult, UpdateReceipt};

/// AND-composed filter over employee asset requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestFilter {
    /// Match requests owned by this admin's email.
    pub admin: Option<String>,
    pub user_email: Option<String>,
    pub asset_type: Option<AssetType>,
    /// Case-insensitive substring match on the snapshotted asset name.
    pub name_contains: Option<String>,
    pub status: Option<RequestStatus>,
    /// Truncate the result list (store-side `limit`).
    pub limit: Option<usize>,
}

#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Store a request document and return its identifier.
    async fn insert(&self, request: &AssetRequest) -> StoreResult<Uuid>;

    /// Fetch a request by id.
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<AssetRequest>>;

    /// List requests matching the filter.
    async fn list(&self, filter: RequestFilter) -> StoreResult<Vec<AssetRequest>>;

    /// Case-insensitive OR match of `needle` against requester name or email.
    ///
    /// An empty needle matches every document.
    async fn search_requester(&self, needle: &str) -> StoreResult<Vec<AssetRequest>>;

    /// Requests by `user_email` with `start <= request_date < end`, sorted by
    /// request date descending.
    async fn list_between(
        &self,
        user_email: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<AssetRequest>>;

    /// Conditionally move a request from `from` to `to`.
    ///
    /// The update filter is `{id, status == from}`; a request in any other
    /// status yields a zero-effect acknowledgement. `approve_date` is written
    /// when provided (the `Pending -> Approved` edge).
    async fn transition(
        &self,
        id: Uuid,
        from: RequestStatus,
        to: RequestStatus,
        approve_date: Option<DateTime<Utc>>,
    ) -> StoreResult<UpdateReceipt>;
}
