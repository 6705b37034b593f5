//! In-memory collections implementing the store ports.
//!
//! Each collection is a `tokio::sync::RwLock` over a vector in insertion
//! order. Conditional writes (the stock decrement, status transitions) hold
//! the write lock for the whole read-check-write, which is what makes them
//! single conditional updates from the callers' point of view.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{
    AssetFilter, AssetStore, CustomRequestStore, OnboardingUpdate, PaymentRecord, PaymentStore,
    ProfileUpdate, RequestFilter, RequestStore, StockAdjustment, StoreResult, Ticket, TicketStore,
    UpdateReceipt, UserFilter, UserStore,
};
use crate::domain::{
    Asset, AssetRequest, CustomAssetRequest, CustomRequestStatus, RequestStatus, User,
};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// In-memory `users` collection.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &User) -> StoreResult<Uuid> {
        self.rows.write().await.push(user.clone());
        Ok(user.id)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn list(&self, filter: UserFilter) -> StoreResult<Vec<User>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|user| {
                filter
                    .have_admin
                    .as_deref()
                    .is_none_or(|admin| user.have_admin.as_deref() == Some(admin))
                    && filter.team.is_none_or(|team| user.team == team)
            })
            .cloned()
            .collect())
    }

    async fn set_quota(
        &self,
        email: &str,
        total: u32,
        remaining: u32,
    ) -> StoreResult<UpdateReceipt> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|user| user.email == email) {
            Some(user) => {
                user.employee_limit_total = Some(total);
                user.employee_limit_remaining = Some(remaining);
                Ok(UpdateReceipt::applied())
            }
            None => Ok(UpdateReceipt::none()),
        }
    }

    async fn set_quota_remaining(&self, email: &str, remaining: u32) -> StoreResult<UpdateReceipt> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|user| user.email == email) {
            Some(user) => {
                user.employee_limit_remaining = Some(remaining);
                Ok(UpdateReceipt::applied())
            }
            None => Ok(UpdateReceipt::none()),
        }
    }

    async fn set_onboarding(
        &self,
        id: Uuid,
        update: &OnboardingUpdate,
    ) -> StoreResult<UpdateReceipt> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.have_admin = update.have_admin.clone();
                user.companylogo = update.companylogo.clone();
                user.team = update.team;
                Ok(UpdateReceipt::applied())
            }
            None => Ok(UpdateReceipt::none()),
        }
    }

    async fn set_profile(&self, id: Uuid, update: &ProfileUpdate) -> StoreResult<UpdateReceipt> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.name = update.name.clone();
                user.dob = update.dob.clone();
                Ok(UpdateReceipt::applied())
            }
            None => Ok(UpdateReceipt::none()),
        }
    }
}

/// In-memory `assets` collection.
#[derive(Default)]
pub struct MemoryAssetStore {
    rows: RwLock<Vec<Asset>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetStore for MemoryAssetStore {
    async fn insert(&self, asset: &Asset) -> StoreResult<Uuid> {
        self.rows.write().await.push(asset.clone());
        Ok(asset.id)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Asset>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|asset| asset.id == id)
            .cloned())
    }

    async fn list(&self, filter: AssetFilter) -> StoreResult<Vec<Asset>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|asset| {
                filter
                    .admin
                    .as_deref()
                    .is_none_or(|admin| asset.admin == admin)
                    && filter.asset_type.is_none_or(|ty| asset.asset_type == ty)
                    && filter
                        .name_contains
                        .as_deref()
                        .is_none_or(|needle| contains_ignore_case(&asset.asset_name, needle))
                    && filter
                        .quantity_below
                        .is_none_or(|threshold| asset.quantity < threshold)
            })
            .cloned()
            .collect())
    }

    async fn decrement_if_available(&self, id: Uuid) -> StoreResult<StockAdjustment> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|asset| asset.id == id) {
            Some(asset) if asset.quantity > 0 => {
                asset.quantity -= 1;
                Ok(StockAdjustment::Adjusted)
            }
            Some(_) => Ok(StockAdjustment::OutOfStock),
            None => Ok(StockAdjustment::Missing),
        }
    }

    async fn increment(&self, id: Uuid) -> StoreResult<UpdateReceipt> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|asset| asset.id == id) {
            Some(asset) => {
                asset.quantity += 1;
                Ok(UpdateReceipt::applied())
            }
            None => Ok(UpdateReceipt::none()),
        }
    }
}

/// In-memory `employeeAssetRequests` collection.
#[derive(Default)]
pub struct MemoryRequestStore {
    rows: RwLock<Vec<AssetRequest>>,
}

impl MemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RequestStore for MemoryRequestStore {
    async fn insert(&self, request: &AssetRequest) -> StoreResult<Uuid> {
        self.rows.write().await.push(request.clone());
        Ok(request.id)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<AssetRequest>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|request| request.id == id)
            .cloned())
    }

    async fn list(&self, filter: RequestFilter) -> StoreResult<Vec<AssetRequest>> {
        let rows = self.rows.read().await;
        let matches = rows.iter().filter(|request| {
            filter
                .admin
                .as_deref()
                .is_none_or(|admin| request.admin == admin)
                && filter
                    .user_email
                    .as_deref()
                    .is_none_or(|email| request.user_email == email)
                && filter.asset_type.is_none_or(|ty| request.asset_type == ty)
                && filter
                    .name_contains
                    .as_deref()
                    .is_none_or(|needle| contains_ignore_case(&request.asset_name, needle))
                && filter.status.is_none_or(|status| request.status == status)
        });
        Ok(match filter.limit {
            Some(limit) => matches.take(limit).cloned().collect(),
            None => matches.cloned().collect(),
        })
    }

    async fn search_requester(&self, needle: &str) -> StoreResult<Vec<AssetRequest>> {
        // An empty needle matches every row.
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|request| {
                contains_ignore_case(&request.user_name, needle)
                    || contains_ignore_case(&request.user_email, needle)
            })
            .cloned()
            .collect())
    }

    async fn list_between(
        &self,
        user_email: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> StoreResult<Vec<AssetRequest>> {
        let mut matches: Vec<AssetRequest> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|request| {
                request.user_email == user_email
                    && request.request_date >= start
                    && request.request_date < end
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.request_date.cmp(&a.request_date));
        Ok(matches)
    }

    async fn transition(
        &self,
        id: Uuid,
        from: RequestStatus,
        to: RequestStatus,
        approve_date: Option<DateTime<Utc>>,
    ) -> StoreResult<UpdateReceipt> {
        let mut rows = self.rows.write().await;
        match rows
            .iter_mut()
            .find(|request| request.id == id && request.status == from)
        {
            Some(request) => {
                request.status = to;
                if approve_date.is_some() {
                    request.approve_date = approve_date;
                }
                Ok(UpdateReceipt::applied())
            }
            None => Ok(UpdateReceipt::none()),
        }
    }
}

/// In-memory `customRequest` collection.
#[derive(Default)]
pub struct MemoryCustomRequestStore {
    rows: RwLock<Vec<CustomAssetRequest>>,
}

impl MemoryCustomRequestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomRequestStore for MemoryCustomRequestStore {
    async fn insert(&self, request: &CustomAssetRequest) -> StoreResult<Uuid> {
        self.rows.write().await.push(request.clone());
        Ok(request.id)
    }

    async fn list_by_admin(&self, admin: &str) -> StoreResult<Vec<CustomAssetRequest>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|request| request.admin == admin)
            .cloned()
            .collect())
    }

    async fn list_by_email(&self, email: &str) -> StoreResult<Vec<CustomAssetRequest>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|request| request.email == email)
            .cloned()
            .collect())
    }

    async fn transition(
        &self,
        id: Uuid,
        from: CustomRequestStatus,
        to: CustomRequestStatus,
    ) -> StoreResult<UpdateReceipt> {
        let mut rows = self.rows.write().await;
        match rows
            .iter_mut()
            .find(|request| request.id == id && request.status == from)
        {
            Some(request) => {
                request.status = to;
                Ok(UpdateReceipt::applied())
            }
            None => Ok(UpdateReceipt::none()),
        }
    }
}

/// In-memory `payment` collection.
#[derive(Default)]
pub struct MemoryPaymentStore {
    rows: RwLock<Vec<PaymentRecord>>,
}

impl MemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for MemoryPaymentStore {
    async fn insert(&self, record: &PaymentRecord) -> StoreResult<Uuid> {
        self.rows.write().await.push(record.clone());
        Ok(record.id)
    }

    async fn recent_by_email(
        &self,
        email: &str,
        limit: usize,
    ) -> StoreResult<Vec<PaymentRecord>> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .rev()
            .filter(|record| record.email == email)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// In-memory `ticket` collection.
#[derive(Default)]
pub struct MemoryTicketStore {
    rows: RwLock<Vec<Ticket>>,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketStore for MemoryTicketStore {
    async fn insert(&self, ticket: &Ticket) -> StoreResult<Uuid> {
        self.rows.write().await.push(ticket.clone());
        Ok(ticket.id)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::AssetType;
    use rstest::rstest;

    fn asset(name: &str, ty: AssetType, quantity: u32, admin: &str) -> Asset {
        Asset {
            id: Uuid::new_v4(),
            asset_name: name.into(),
            asset_type: ty,
            quantity,
            admin: admin.into(),
            date_added: None,
        }
    }

    #[rstest]
    #[case("lap", true)]
    #[case("LAPTOP", true)]
    #[case("dell", true)]
    #[case("mouse", false)]
    #[tokio::test]
    async fn asset_name_filter_is_case_insensitive_substring(
        #[case] needle: &str,
        #[case] expected: bool,
    ) {
        let store = MemoryAssetStore::new();
        store
            .insert(&asset("Laptop Dell", AssetType::Returnable, 5, "boss@x.com"))
            .await
            .expect("insert");
        let found = store
            .list(AssetFilter {
                name_contains: Some(needle.into()),
                ..AssetFilter::default()
            })
            .await
            .expect("list");
        assert_eq!(!found.is_empty(), expected);
    }

    #[tokio::test]
    async fn type_and_name_filters_compose_with_and() {
        let store = MemoryAssetStore::new();
        store
            .insert(&asset("Laptop Dell", AssetType::Returnable, 5, "boss@x.com"))
            .await
            .expect("insert");
        store
            .insert(&asset(
                "Laptop Dell",
                AssetType::NonReturnable,
                5,
                "boss@x.com",
            ))
            .await
            .expect("insert");
        let found = store
            .list(AssetFilter {
                asset_type: Some(AssetType::Returnable),
                name_contains: Some("lap".into()),
                ..AssetFilter::default()
            })
            .await
            .expect("list");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].asset_type, AssetType::Returnable);
    }

    #[tokio::test]
    async fn guarded_decrement_stops_at_zero() {
        let store = MemoryAssetStore::new();
        let doc = asset("Monitor", AssetType::Returnable, 1, "boss@x.com");
        store.insert(&doc).await.expect("insert");

        assert_eq!(
            store
                .decrement_if_available(doc.id)
                .await
                .expect("decrement"),
            StockAdjustment::Adjusted
        );
        assert_eq!(
            store
                .decrement_if_available(doc.id)
                .await
                .expect("decrement"),
            StockAdjustment::OutOfStock
        );
        let stored = store.find_by_id(doc.id).await.expect("find").expect("doc");
        assert_eq!(stored.quantity, 0);
    }

    #[tokio::test]
    async fn decrement_of_missing_asset_reports_missing() {
        let store = MemoryAssetStore::new();
        assert_eq!(
            store
                .decrement_if_available(Uuid::new_v4())
                .await
                .expect("decrement"),
            StockAdjustment::Missing
        );
    }

    #[tokio::test]
    async fn empty_requester_needle_matches_every_row() {
        let store = MemoryRequestStore::new();
        let request = AssetRequest {
            id: Uuid::new_v4(),
            asset_id: Uuid::new_v4(),
            asset_name: "Laptop".into(),
            asset_type: AssetType::Returnable,
            user_name: "Ada".into(),
            user_email: "ada@x.com".into(),
            admin: "boss@x.com".into(),
            status: RequestStatus::Pending,
            request_date: Utc::now(),
            approve_date: None,
        };
        store.insert(&request).await.expect("insert");
        assert_eq!(store.search_requester("").await.expect("search").len(), 1);
        assert_eq!(
            store.search_requester("ADA").await.expect("search").len(),
            1
        );
        assert!(
            store
                .search_requester("nobody")
                .await
                .expect("search")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn quota_update_on_missing_email_is_a_zero_effect_success() {
        let store = MemoryUserStore::new();
        let receipt = store
            .set_quota("ghost@x.com", 10, 10)
            .await
            .expect("update");
        assert!(!receipt.matched());
    }

    #[tokio::test]
    async fn recent_payments_are_newest_first_and_capped() {
        let store = MemoryPaymentStore::new();
        for price in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            store
                .insert(&PaymentRecord {
                    id: Uuid::new_v4(),
                    email: "boss@x.com".into(),
                    price,
                    transaction_id: None,
                    date: Utc::now(),
                })
                .await
                .expect("insert");
        }
        let recent = store
            .recent_by_email("boss@x.com", 5)
            .await
            .expect("recent");
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].price, 6.0);
    }
}
