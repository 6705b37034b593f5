//! Tests for the request lifecycle service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::ports::{AssetFilter, RequestFilter};
use crate::domain::{
    Asset, AssetRequest, AssetType, CustomAssetRequest, CustomRequestStatus, ErrorCode,
    InventoryLedger, RequestLifecycle, RequestStatus,
};
use crate::outbound::persistence::{
    MemoryAssetStore, MemoryCustomRequestStore, MemoryRequestStore,
};

struct Fixture {
    lifecycle: Arc<RequestLifecycle>,
    inventory: Arc<InventoryLedger>,
}

fn fixture() -> Fixture {
    let inventory = Arc::new(InventoryLedger::new(Arc::new(MemoryAssetStore::new())));
    let lifecycle = Arc::new(RequestLifecycle::new(
        Arc::new(MemoryRequestStore::new()),
        Arc::new(MemoryCustomRequestStore::new()),
        inventory.clone(),
    ));
    Fixture {
        lifecycle,
        inventory,
    }
}

fn asset(ty: AssetType, quantity: u32) -> Asset {
    Asset {
        id: Uuid::new_v4(),
        asset_name: "Laptop Dell".into(),
        asset_type: ty,
        quantity,
        admin: "boss@x.com".into(),
        date_added: None,
    }
}

fn request_for(asset: &Asset, user_email: &str) -> AssetRequest {
    AssetRequest {
        id: Uuid::new_v4(),
        asset_id: asset.id,
        asset_name: asset.asset_name.clone(),
        asset_type: asset.asset_type,
        user_name: "Ada".into(),
        user_email: user_email.into(),
        admin: asset.admin.clone(),
        status: RequestStatus::Pending,
        request_date: Utc::now(),
        approve_date: None,
    }
}

async fn quantity_of(inventory: &InventoryLedger, name: &str) -> u32 {
    inventory
        .search(AssetFilter {
            name_contains: Some(name.into()),
            ..AssetFilter::default()
        })
        .await
        .expect("search")[0]
        .quantity
}

#[tokio::test]
async fn submission_is_normalised_to_pending_without_approve_date() {
    let fx = fixture();
    let doc = asset(AssetType::Returnable, 5);
    fx.inventory.add(&doc).await.expect("add");

    let mut crafted = request_for(&doc, "ada@x.com");
    crafted.status = RequestStatus::Approved;
    crafted.approve_date = Some(Utc::now());
    fx.lifecycle.submit(&crafted).await.expect("submit");

    let stored = fx
        .lifecycle
        .list(RequestFilter::default())
        .await
        .expect("list");
    assert_eq!(stored[0].status, RequestStatus::Pending);
    assert!(stored[0].approve_date.is_none());
    // Stock is untouched at submission.
    assert_eq!(quantity_of(&fx.inventory, "laptop").await, 5);
}

#[tokio::test]
async fn approval_sets_the_date_and_decrements_stock_exactly_once() {
    let fx = fixture();
    let doc = asset(AssetType::Returnable, 5);
    fx.inventory.add(&doc).await.expect("add");
    let request = request_for(&doc, "ada@x.com");
    fx.lifecycle.submit(&request).await.expect("submit");

    let when = Utc::now();
    let receipt = fx.lifecycle.approve(request.id, when).await.expect("approve");
    assert!(receipt.matched());
    assert_eq!(quantity_of(&fx.inventory, "laptop").await, 4);

    let stored = fx
        .lifecycle
        .list(RequestFilter::default())
        .await
        .expect("list");
    assert_eq!(stored[0].status, RequestStatus::Approved);
    assert_eq!(stored[0].approve_date, Some(when));

    // A second approve of the same request is a zero-effect acknowledgement
    // and must not take more stock.
    let retry = fx
        .lifecycle
        .approve(request.id, Utc::now())
        .await
        .expect("retry");
    assert!(!retry.matched());
    assert_eq!(quantity_of(&fx.inventory, "laptop").await, 4);
}

#[tokio::test]
async fn approval_of_unknown_request_is_a_zero_effect_success() {
    let fx = fixture();
    let receipt = fx
        .lifecycle
        .approve(Uuid::new_v4(), Utc::now())
        .await
        .expect("no error");
    assert!(!receipt.matched());
}

#[tokio::test]
async fn approval_with_no_stock_fails_out_of_stock_and_keeps_the_request_pending() {
    let fx = fixture();
    let doc = asset(AssetType::Returnable, 0);
    fx.inventory.add(&doc).await.expect("add");
    let request = request_for(&doc, "ada@x.com");
    fx.lifecycle.submit(&request).await.expect("submit");

    let err = fx
        .lifecycle
        .approve(request.id, Utc::now())
        .await
        .expect_err("no stock");
    assert_eq!(err.code(), ErrorCode::OutOfStock);

    let stored = fx
        .lifecycle
        .list(RequestFilter::default())
        .await
        .expect("list");
    assert_eq!(stored[0].status, RequestStatus::Pending);
}

#[tokio::test]
async fn concurrent_approvals_never_drive_stock_negative() {
    let fx = fixture();
    let doc = asset(AssetType::NonReturnable, 3);
    fx.inventory.add(&doc).await.expect("add");

    let mut ids = Vec::new();
    for i in 0..8 {
        let request = request_for(&doc, &format!("user{i}@x.com"));
        fx.lifecycle.submit(&request).await.expect("submit");
        ids.push(request.id);
    }

    let mut handles = Vec::new();
    for id in ids {
        let lifecycle = fx.lifecycle.clone();
        handles.push(tokio::spawn(
            async move { lifecycle.approve(id, Utc::now()).await },
        ));
    }

    let mut approved = 0;
    let mut out_of_stock = 0;
    for handle in handles {
        match handle.await.expect("join") {
            Ok(receipt) => {
                assert!(receipt.matched());
                approved += 1;
            }
            Err(err) => {
                assert_eq!(err.code(), ErrorCode::OutOfStock);
                out_of_stock += 1;
            }
        }
    }
    assert_eq!(approved, 3);
    assert_eq!(out_of_stock, 5);
    assert_eq!(quantity_of(&fx.inventory, "laptop").await, 0);
}

#[tokio::test]
async fn rejection_leaves_stock_alone() {
    let fx = fixture();
    let doc = asset(AssetType::Returnable, 5);
    fx.inventory.add(&doc).await.expect("add");
    let request = request_for(&doc, "ada@x.com");
    fx.lifecycle.submit(&request).await.expect("submit");

    let receipt = fx.lifecycle.reject(request.id).await.expect("reject");
    assert!(receipt.matched());
    assert_eq!(quantity_of(&fx.inventory, "laptop").await, 5);

    // Rejected is terminal: a later approve matches nothing.
    let retry = fx
        .lifecycle
        .approve(request.id, Utc::now())
        .await
        .expect("retry");
    assert!(!retry.matched());
}

#[tokio::test]
async fn returning_a_returnable_asset_restocks_one_unit() {
    let fx = fixture();
    let doc = asset(AssetType::Returnable, 5);
    fx.inventory.add(&doc).await.expect("add");
    let request = request_for(&doc, "ada@x.com");
    fx.lifecycle.submit(&request).await.expect("submit");
    fx.lifecycle
        .approve(request.id, Utc::now())
        .await
        .expect("approve");
    assert_eq!(quantity_of(&fx.inventory, "laptop").await, 4);

    let receipt = fx
        .lifecycle
        .mark_returned(request.id)
        .await
        .expect("return");
    assert!(receipt.matched());
    assert_eq!(quantity_of(&fx.inventory, "laptop").await, 5);

    // Returned is terminal; a second return must not restock again.
    let retry = fx
        .lifecycle
        .mark_returned(request.id)
        .await
        .expect("retry");
    assert!(!retry.matched());
    assert_eq!(quantity_of(&fx.inventory, "laptop").await, 5);
}

#[tokio::test]
async fn non_returnable_assets_cannot_be_returned() {
    let fx = fixture();
    let doc = asset(AssetType::NonReturnable, 5);
    fx.inventory.add(&doc).await.expect("add");
    let request = request_for(&doc, "ada@x.com");
    fx.lifecycle.submit(&request).await.expect("submit");
    fx.lifecycle
        .approve(request.id, Utc::now())
        .await
        .expect("approve");

    let err = fx
        .lifecycle
        .mark_returned(request.id)
        .await
        .expect_err("not returnable");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn pending_cannot_be_returned_and_approved_cannot_be_rejected() {
    let fx = fixture();
    let doc = asset(AssetType::Returnable, 5);
    fx.inventory.add(&doc).await.expect("add");
    let request = request_for(&doc, "ada@x.com");
    fx.lifecycle.submit(&request).await.expect("submit");

    // Pending -> Returned matches nothing.
    let receipt = fx
        .lifecycle
        .mark_returned(request.id)
        .await
        .expect("return attempt");
    assert!(!receipt.matched());

    fx.lifecycle
        .approve(request.id, Utc::now())
        .await
        .expect("approve");

    // Approved -> Rejected matches nothing.
    let receipt = fx.lifecycle.reject(request.id).await.expect("reject");
    assert!(!receipt.matched());
}

#[tokio::test]
async fn apply_status_refuses_a_transition_back_to_pending() {
    let fx = fixture();
    let err = fx
        .lifecycle
        .apply_status(Uuid::new_v4(), RequestStatus::Pending, None)
        .await
        .expect_err("refused");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn pending_queue_is_scoped_to_the_admin_and_capped_at_five() {
    let fx = fixture();
    let doc = asset(AssetType::Returnable, 50);
    fx.inventory.add(&doc).await.expect("add");
    for i in 0..7 {
        let request = request_for(&doc, &format!("user{i}@x.com"));
        fx.lifecycle.submit(&request).await.expect("submit");
    }
    let mut foreign = request_for(&doc, "other@x.com");
    foreign.admin = "someone-else@x.com".into();
    fx.lifecycle.submit(&foreign).await.expect("submit");

    let queue = fx.lifecycle.pending_queue("boss@x.com").await.expect("queue");
    assert_eq!(queue.len(), 5);
    assert!(queue.iter().all(|r| r.admin == "boss@x.com"));
}

#[tokio::test]
async fn split_by_type_returns_two_independent_lists() {
    let fx = fixture();
    let returnable = asset(AssetType::Returnable, 5);
    let mut consumable = asset(AssetType::NonReturnable, 5);
    consumable.asset_name = "Notebook".into();
    fx.inventory.add(&returnable).await.expect("add");
    fx.inventory.add(&consumable).await.expect("add");

    fx.lifecycle
        .submit(&request_for(&returnable, "ada@x.com"))
        .await
        .expect("submit");
    fx.lifecycle
        .submit(&request_for(&consumable, "ada@x.com"))
        .await
        .expect("submit");

    let split = fx.lifecycle.split_by_type("boss@x.com").await.expect("split");
    assert_eq!(split.returnable.len(), 1);
    assert_eq!(split.non_returnable.len(), 1);
    assert_eq!(split.returnable[0].asset_type, AssetType::Returnable);
}

#[tokio::test]
async fn monthly_listing_is_window_scoped_and_newest_first() {
    let fx = fixture();
    let doc = asset(AssetType::Returnable, 50);
    fx.inventory.add(&doc).await.expect("add");
    let now = Utc::now();

    let mut old = request_for(&doc, "ada@x.com");
    old.request_date = now - Duration::days(45);
    let mut early = request_for(&doc, "ada@x.com");
    early.request_date = now - Duration::minutes(30);
    let mut late = request_for(&doc, "ada@x.com");
    late.request_date = now - Duration::minutes(5);

    for request in [&old, &early, &late] {
        fx.lifecycle.submit(request).await.expect("submit");
    }

    let monthly = fx
        .lifecycle
        .monthly_for_requester("ada@x.com", now)
        .await
        .expect("monthly");
    // The 45-day-old request falls outside the calendar month (and even if
    // `now` is mid-month, an in-month subset is still sorted newest first).
    assert!(monthly.len() <= 2);
    if monthly.len() == 2 {
        assert_eq!(monthly[0].request_date, late.request_date);
        assert_eq!(monthly[1].request_date, early.request_date);
    }
    assert!(monthly.iter().all(|r| r.request_date > now - Duration::days(40)));
}

#[tokio::test]
async fn custom_requests_settle_once_and_retries_are_zero_effect() {
    let fx = fixture();
    let custom = CustomAssetRequest {
        id: Uuid::new_v4(),
        user_name: Some("Ada".into()),
        email: "ada@x.com".into(),
        admin: "boss@x.com".into(),
        asset_name: Some("Standing desk".into()),
        description: Some("Not in the catalog".into()),
        status: CustomRequestStatus::Pending,
        request_date: Utc::now(),
    };
    fx.lifecycle.submit_custom(&custom).await.expect("submit");

    let mine = fx
        .lifecycle
        .custom_for_requester("ada@x.com")
        .await
        .expect("mine");
    assert_eq!(mine[0].status, CustomRequestStatus::Pending);

    let receipt = fx
        .lifecycle
        .decide_custom(custom.id, CustomRequestStatus::Approved)
        .await
        .expect("decide");
    assert!(receipt.matched());

    // Retrying the decision acknowledges zero-effect and the status stays
    // Approved; a late reject cannot overwrite it either.
    let retry = fx
        .lifecycle
        .decide_custom(custom.id, CustomRequestStatus::Approved)
        .await
        .expect("retry");
    assert!(!retry.matched());
    let flip = fx
        .lifecycle
        .decide_custom(custom.id, CustomRequestStatus::Rejected)
        .await
        .expect("flip");
    assert!(!flip.matched());

    let listed = fx
        .lifecycle
        .custom_for_admin("boss@x.com")
        .await
        .expect("admin list");
    assert_eq!(listed[0].status, CustomRequestStatus::Approved);
}

#[tokio::test]
async fn deciding_a_custom_request_back_to_pending_is_invalid() {
    let fx = fixture();
    let err = fx
        .lifecycle
        .decide_custom(Uuid::new_v4(), CustomRequestStatus::Pending)
        .await
        .expect_err("refused");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}
