//! Request lifecycle service: the state machine for employee asset requests
//! and custom requests, plus their query surface.
//!
//! The only writer of request status and date fields, and the only trigger
//! of inventory quantity changes. Stock is untouched at submission; it moves
//! at the `Pending -> Approved` edge (decrement) and the
//! `Approved -> Returned` edge (increment, returnable assets only).

use std::sync::Arc;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{
    CustomRequestStore, InsertReceipt, RequestFilter, RequestStore, UpdateReceipt,
};
use crate::domain::{
    AssetRequest, AssetType, CustomAssetRequest, CustomRequestStatus, Error, ErrorCode,
    InventoryLedger, RequestStatus,
};

/// Admin-side pending queue is capped at the first five entries.
pub const PENDING_QUEUE_LIMIT: usize = 5;

/// Two independent filtered reads, not a partition: callers must not assume
/// coverage beyond the two type values present in the data.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestSplit {
    pub returnable: Vec<AssetRequest>,
    pub non_returnable: Vec<AssetRequest>,
}

/// Owns both request kinds and drives every status transition.
pub struct RequestLifecycle {
    requests: Arc<dyn RequestStore>,
    custom: Arc<dyn CustomRequestStore>,
    inventory: Arc<InventoryLedger>,
}

impl RequestLifecycle {
    pub fn new(
        requests: Arc<dyn RequestStore>,
        custom: Arc<dyn CustomRequestStore>,
        inventory: Arc<InventoryLedger>,
    ) -> Self {
        Self {
            requests,
            custom,
            inventory,
        }
    }

    /// Record a new employee request in `Pending`.
    ///
    /// Stock is neither checked nor reserved here; that happens at approval.
    /// Submitted status and approve date are normalised so a crafted body
    /// cannot enter the machine mid-flight.
    pub async fn submit(&self, request: &AssetRequest) -> Result<InsertReceipt, Error> {
        let mut request = request.clone();
        request.status = RequestStatus::Pending;
        request.approve_date = None;
        let id = self.requests.insert(&request).await?;
        Ok(InsertReceipt::inserted(id))
    }

    /// `Pending -> Approved`, coupled with the guarded stock decrement.
    ///
    /// The decrement runs first; the conditional status claim then settles
    /// which caller wins a race on the same request, and the loser's unit is
    /// restocked. Exhausted stock surfaces as `out_of_stock` and leaves the
    /// request `Pending`. A missing request id acknowledges as a zero-effect
    /// update.
    pub async fn approve(
        &self,
        id: Uuid,
        approve_date: DateTime<Utc>,
    ) -> Result<UpdateReceipt, Error> {
        let Some(request) = self.requests.find_by_id(id).await? else {
            return Ok(UpdateReceipt::none());
        };
        if request.status != RequestStatus::Pending {
            return Ok(UpdateReceipt::none());
        }
        self.inventory.reserve(request.asset_id).await?;
        let receipt = self
            .requests
            .transition(
                id,
                RequestStatus::Pending,
                RequestStatus::Approved,
                Some(approve_date),
            )
            .await?;
        if !receipt.matched() {
            // Lost the claim race; hand the reserved unit back.
            self.inventory.restock(request.asset_id).await?;
        }
        Ok(receipt)
    }

    /// `Pending -> Rejected`. No ledger effect.
    pub async fn reject(&self, id: Uuid) -> Result<UpdateReceipt, Error> {
        Ok(self
            .requests
            .transition(id, RequestStatus::Pending, RequestStatus::Rejected, None)
            .await?)
    }

    /// `Approved -> Returned`, restocking one unit. Returnable assets only.
    pub async fn mark_returned(&self, id: Uuid) -> Result<UpdateReceipt, Error> {
        let Some(request) = self.requests.find_by_id(id).await? else {
            return Ok(UpdateReceipt::none());
        };
        if request.asset_type != AssetType::Returnable {
            return Err(Error::invalid_request(
                "only returnable assets can be returned",
            ));
        }
        let receipt = self
            .requests
            .transition(id, RequestStatus::Approved, RequestStatus::Returned, None)
            .await?;
        if receipt.matched() {
            let restock = self.inventory.restock(request.asset_id).await?;
            if !restock.matched() {
                tracing::warn!(request_id = %id, "returned request references a missing asset");
            }
        }
        Ok(receipt)
    }

    /// Apply the transition named by a status patch.
    ///
    /// `Pending` is the initial state, never a transition target.
    pub async fn apply_status(
        &self,
        id: Uuid,
        status: RequestStatus,
        approve_date: Option<DateTime<Utc>>,
    ) -> Result<UpdateReceipt, Error> {
        match status {
            RequestStatus::Approved => {
                self.approve(id, approve_date.unwrap_or_else(Utc::now)).await
            }
            RequestStatus::Rejected => self.reject(id).await,
            RequestStatus::Returned => self.mark_returned(id).await,
            RequestStatus::Pending => Err(Error::new(
                ErrorCode::InvalidRequest,
                "a request cannot transition back to Pending",
            )),
        }
    }

    /// List requests matching an AND-composed filter.
    pub async fn list(&self, filter: RequestFilter) -> Result<Vec<AssetRequest>, Error> {
        Ok(self.requests.list(filter).await?)
    }

    /// Case-insensitive OR search over requester name and email.
    ///
    /// An empty needle matches everything; clients send it that way when the
    /// search box is blank.
    pub async fn search_requester(&self, needle: &str) -> Result<Vec<AssetRequest>, Error> {
        Ok(self.requests.search_requester(needle).await?)
    }

    /// A requester's requests still awaiting a decision.
    pub async fn pending_for_requester(&self, email: &str) -> Result<Vec<AssetRequest>, Error> {
        let filter = RequestFilter {
            user_email: Some(email.to_owned()),
            status: Some(RequestStatus::Pending),
            ..RequestFilter::default()
        };
        Ok(self.requests.list(filter).await?)
    }

    /// The first five pending requests owned by an admin.
    pub async fn pending_queue(&self, admin_email: &str) -> Result<Vec<AssetRequest>, Error> {
        let filter = RequestFilter {
            admin: Some(admin_email.to_owned()),
            status: Some(RequestStatus::Pending),
            limit: Some(PENDING_QUEUE_LIMIT),
            ..RequestFilter::default()
        };
        Ok(self.requests.list(filter).await?)
    }

    /// An admin's requests as two independent reads, one per asset type.
    pub async fn split_by_type(&self, admin_email: &str) -> Result<RequestSplit, Error> {
        let returnable = self
            .requests
            .list(RequestFilter {
                admin: Some(admin_email.to_owned()),
                asset_type: Some(AssetType::Returnable),
                ..RequestFilter::default()
            })
            .await?;
        let non_returnable = self
            .requests
            .list(RequestFilter {
                admin: Some(admin_email.to_owned()),
                asset_type: Some(AssetType::NonReturnable),
                ..RequestFilter::default()
            })
            .await?;
        Ok(RequestSplit {
            returnable,
            non_returnable,
        })
    }

    /// A requester's requests dated in the calendar month containing `now`,
    /// newest first.
    pub async fn monthly_for_requester(
        &self,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<AssetRequest>, Error> {
        let (start, end) = month_window(now)?;
        Ok(self.requests.list_between(email, start, end).await?)
    }

    /// Record a new custom request in `Pending`.
    pub async fn submit_custom(
        &self,
        request: &CustomAssetRequest,
    ) -> Result<InsertReceipt, Error> {
        let mut request = request.clone();
        request.status = CustomRequestStatus::Pending;
        let id = self.custom.insert(&request).await?;
        Ok(InsertReceipt::inserted(id))
    }

    /// Custom requests owned by an admin.
    pub async fn custom_for_admin(&self, admin: &str) -> Result<Vec<CustomAssetRequest>, Error> {
        Ok(self.custom.list_by_admin(admin).await?)
    }

    /// Custom requests submitted by a requester.
    pub async fn custom_for_requester(
        &self,
        email: &str,
    ) -> Result<Vec<CustomAssetRequest>, Error> {
        Ok(self.custom.list_by_email(email).await?)
    }

    /// `Pending -> Approved | Rejected` for a custom request.
    ///
    /// Retrying a settled decision matches nothing and acknowledges with a
    /// zero-effect receipt; there are no side effects to duplicate.
    pub async fn decide_custom(
        &self,
        id: Uuid,
        status: CustomRequestStatus,
    ) -> Result<UpdateReceipt, Error> {
        if status == CustomRequestStatus::Pending {
            return Err(Error::invalid_request(
                "a custom request cannot transition back to Pending",
            ));
        }
        Ok(self
            .custom
            .transition(id, CustomRequestStatus::Pending, status)
            .await?)
    }
}

/// Bounds of the calendar month containing `now`: first instant of the month
/// (inclusive) to first instant of the next month (exclusive).
fn month_window(now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>), Error> {
    let (year, month) = (now.year(), now.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let start = Utc
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| Error::internal("invalid month window start"))?;
    let end = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| Error::internal("invalid month window end"))?;
    Ok((start, end))
}
