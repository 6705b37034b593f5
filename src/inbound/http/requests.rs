//! Request lifecycle API handlers: submission, the listing surface, and the
//! status patch that drives every transition.

use actix_web::{get, patch, post, web};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::ports::{InsertReceipt, RequestFilter, UpdateReceipt};
use crate::domain::{AssetRequest, AssetType, Error, Identity, RequestSplit, RequestStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query filters shared by the request listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RequestListQuery {
    /// Case-insensitive asset name substring.
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
}

impl RequestListQuery {
    fn into_filter(self) -> RequestFilter {
        RequestFilter {
            name_contains: self.q,
            asset_type: self.asset_type,
            ..RequestFilter::default()
        }
    }
}

/// Requester search query for the admin overview.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RequesterSearchQuery {
    /// Case-insensitive substring matched against requester name or email.
    pub q: Option<String>,
}

/// Body for `PATCH /admin/update-request-asset-info/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusPatch {
    pub status: RequestStatus,
    #[serde(default)]
    pub approve_date: Option<DateTime<Utc>>,
}

/// Submit an employee request for a catalog asset.
///
/// Stock is untouched here; it moves when an admin approves.
#[utoipa::path(
    post,
    path = "/employee/asset-request",
    request_body = AssetRequest,
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertReceipt),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["requests"],
    operation_id = "submitRequest",
    security(("bearerAuth" = []))
)]
#[post("/employee/asset-request")]
pub async fn submit_request(
    state: web::Data<HttpState>,
    identity: Identity,
    request: web::Json<AssetRequest>,
) -> ApiResult<web::Json<InsertReceipt>> {
    // Existing clients submit through an admin account; the route keeps the
    // admin gate for compatibility with them.
    state.gate.authorize_admin(&identity).await?;
    let receipt = state.lifecycle.submit(&request).await?;
    Ok(web::Json(receipt))
}

/// Requests visible to an employee's asset list.
///
/// The path email matches the request's `admin` field, not the requester;
/// the deployed frontend relies on that shape.
#[utoipa::path(
    get,
    path = "/employee/my-asset-list/{email}",
    params(("email" = String, Path, description = "Admin email"), RequestListQuery),
    responses(
        (status = 200, description = "Matching requests", body = [AssetRequest]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["requests"],
    operation_id = "myAssetList",
    security(("bearerAuth" = []))
)]
#[get("/employee/my-asset-list/{email}")]
pub async fn my_asset_list(
    state: web::Data<HttpState>,
    _identity: Identity,
    email: web::Path<String>,
    query: web::Query<RequestListQuery>,
) -> ApiResult<web::Json<Vec<AssetRequest>>> {
    let mut filter = query.into_inner().into_filter();
    filter.admin = Some(email.into_inner());
    let requests = state.lifecycle.list(filter).await?;
    Ok(web::Json(requests))
}

/// Admin listing of requests, filtered by asset name and type.
#[utoipa::path(
    get,
    path = "/admin/requested-asset-list",
    params(RequestListQuery),
    responses(
        (status = 200, description = "Matching requests", body = [AssetRequest]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["requests"],
    operation_id = "requestedAssetList",
    security(("bearerAuth" = []))
)]
#[get("/admin/requested-asset-list")]
pub async fn requested_asset_list(
    state: web::Data<HttpState>,
    identity: Identity,
    query: web::Query<RequestListQuery>,
) -> ApiResult<web::Json<Vec<AssetRequest>>> {
    state.gate.authorize_admin(&identity).await?;
    let requests = state.lifecycle.list(query.into_inner().into_filter()).await?;
    Ok(web::Json(requests))
}

/// Admin search over requester name and email.
#[utoipa::path(
    get,
    path = "/admin/employee-all-asset-request",
    params(RequesterSearchQuery),
    responses(
        (status = 200, description = "Matching requests", body = [AssetRequest]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["requests"],
    operation_id = "searchRequests",
    security(("bearerAuth" = []))
)]
#[get("/admin/employee-all-asset-request")]
pub async fn search_requests(
    state: web::Data<HttpState>,
    identity: Identity,
    query: web::Query<RequesterSearchQuery>,
) -> ApiResult<web::Json<Vec<AssetRequest>>> {
    state.gate.authorize_admin(&identity).await?;
    let needle = query.into_inner().q.unwrap_or_default();
    let requests = state.lifecycle.search_requester(&needle).await?;
    Ok(web::Json(requests))
}

/// A requester's requests still awaiting a decision.
#[utoipa::path(
    get,
    path = "/employee/my-all-pending-asset-request/{email}",
    params(("email" = String, Path, description = "Requester email")),
    responses(
        (status = 200, description = "Pending requests", body = [AssetRequest]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["requests"],
    operation_id = "myPendingRequests",
    security(("bearerAuth" = []))
)]
#[get("/employee/my-all-pending-asset-request/{email}")]
pub async fn my_pending_requests(
    state: web::Data<HttpState>,
    _identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<AssetRequest>>> {
    let requests = state.lifecycle.pending_for_requester(&email).await?;
    Ok(web::Json(requests))
}

/// The first five pending requests owned by an admin.
#[utoipa::path(
    get,
    path = "/admin/all-pending-asset-request/{email}",
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, description = "Pending queue, capped at five", body = [AssetRequest]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["requests"],
    operation_id = "pendingQueue",
    security(("bearerAuth" = []))
)]
#[get("/admin/all-pending-asset-request/{email}")]
pub async fn pending_queue(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<AssetRequest>>> {
    state.gate.authorize_admin(&identity).await?;
    let requests = state.lifecycle.pending_queue(&email).await?;
    Ok(web::Json(requests))
}

/// An admin's requests split into returnable and non-returnable reads.
#[utoipa::path(
    get,
    path = "/admin/all-asset-request/{email}",
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, description = "Requests split by asset type", body = RequestSplit),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["requests"],
    operation_id = "splitRequests",
    security(("bearerAuth" = []))
)]
#[get("/admin/all-asset-request/{email}")]
pub async fn split_requests(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<RequestSplit>> {
    state.gate.authorize_admin(&identity).await?;
    let split = state.lifecycle.split_by_type(&email).await?;
    Ok(web::Json(split))
}

/// A requester's requests from the current calendar month, newest first.
#[utoipa::path(
    get,
    path = "/employee/my-all-monthly-asset-request/{email}",
    params(("email" = String, Path, description = "Requester email")),
    responses(
        (status = 200, description = "This month's requests", body = [AssetRequest]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["requests"],
    operation_id = "myMonthlyRequests",
    security(("bearerAuth" = []))
)]
#[get("/employee/my-all-monthly-asset-request/{email}")]
pub async fn my_monthly_requests(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<AssetRequest>>> {
    // This employee listing sits behind the admin gate; the deployed
    // frontend only calls it from admin dashboards.
    state.gate.authorize_admin(&identity).await?;
    let requests = state.lifecycle.monthly_for_requester(&email, Utc::now()).await?;
    Ok(web::Json(requests))
}

/// Drive a status transition on a request.
///
/// `Approved` couples the guarded stock decrement and stamps the approve
/// date; `Returned` restocks. Exhausted stock answers 409 and leaves the
/// request pending. A missing or already-settled request acknowledges with a
/// zero-effect receipt.
#[utoipa::path(
    patch,
    path = "/admin/update-request-asset-info/{id}",
    params(("id" = Uuid, Path, description = "Request id")),
    request_body = StatusPatch,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateReceipt),
        (status = 400, description = "Invalid transition", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 409, description = "Asset is out of stock", body = Error)
    ),
    tags = ["requests"],
    operation_id = "updateRequestStatus",
    security(("bearerAuth" = []))
)]
#[patch("/admin/update-request-asset-info/{id}")]
pub async fn update_request_status(
    state: web::Data<HttpState>,
    identity: Identity,
    id: web::Path<Uuid>,
    patch: web::Json<StatusPatch>,
) -> ApiResult<web::Json<UpdateReceipt>> {
    state.gate.authorize_admin(&identity).await?;
    let patch = patch.into_inner();
    let receipt = state
        .lifecycle
        .apply_status(*id, patch.status, patch.approve_date)
        .await?;
    Ok(web::Json(receipt))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::Asset;
    use crate::inbound::http::test_utils::{bearer, seed_admin, seed_employee, test_state};
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::{Value, json};

    fn test_app(
        state: web::Data<HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .service(submit_request)
            .service(my_asset_list)
            .service(requested_asset_list)
            .service(search_requests)
            .service(my_pending_requests)
            .service(pending_queue)
            .service(split_requests)
            .service(my_monthly_requests)
            .service(update_request_status)
    }

    async fn seed_catalog_asset(state: &HttpState, name: &str, quantity: u32) -> Asset {
        let asset: Asset = serde_json::from_value(json!({
            "assetName": name,
            "type": "returnable",
            "quantity": quantity,
            "admin": "boss@x.com"
        }))
        .expect("asset json");
        state.inventory.add(&asset).await.expect("seed asset");
        asset
    }

    fn request_body(asset: &Asset) -> Value {
        json!({
            "assetId": asset.id,
            "assetName": asset.asset_name,
            "type": "returnable",
            "userName": "Ada",
            "userEmail": "ada@x.com",
            "admin": "boss@x.com"
        })
    }

    #[actix_web::test]
    async fn submission_requires_an_admin_token() {
        let state = test_state();
        let token = seed_employee(&state, "ada@x.com").await;
        let asset = seed_catalog_asset(&state, "Laptop Dell", 3).await;
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::post()
            .uri("/employee/asset-request")
            .insert_header(bearer(&token))
            .set_json(request_body(&asset))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn approval_decrements_stock_and_stamps_the_approve_date() {
        let state = test_state();
        let token = seed_admin(&state, "boss@x.com").await;
        let asset = seed_catalog_asset(&state, "Laptop Dell", 3).await;
        let app = actix_test::init_service(test_app(state.clone())).await;

        let submit = actix_test::TestRequest::post()
            .uri("/employee/asset-request")
            .insert_header(bearer(&token))
            .set_json(request_body(&asset))
            .to_request();
        let response = actix_test::call_service(&app, submit).await;
        assert!(response.status().is_success());
        let receipt: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("body");
        let id = receipt
            .get("insertedId")
            .and_then(Value::as_str)
            .expect("inserted id")
            .to_owned();

        let patch = actix_test::TestRequest::patch()
            .uri(&format!("/admin/update-request-asset-info/{id}"))
            .insert_header(bearer(&token))
            .set_json(json!({ "status": "Approved" }))
            .to_request();
        let response = actix_test::call_service(&app, patch).await;
        assert!(response.status().is_success());
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("body");
        assert_eq!(value.get("modifiedCount").and_then(Value::as_u64), Some(1));

        let stored = state
            .inventory
            .search(Default::default())
            .await
            .expect("assets");
        assert_eq!(stored[0].quantity, 2);

        let requests = state
            .lifecycle
            .list(RequestFilter::default())
            .await
            .expect("requests");
        assert_eq!(requests[0].status, RequestStatus::Approved);
        assert!(requests[0].approve_date.is_some());
    }

    #[actix_web::test]
    async fn approving_an_exhausted_asset_answers_conflict() {
        let state = test_state();
        let token = seed_admin(&state, "boss@x.com").await;
        let asset = seed_catalog_asset(&state, "Laptop Dell", 0).await;
        let receipt = state
            .lifecycle
            .submit(&serde_json::from_value(request_body(&asset)).expect("request"))
            .await
            .expect("submit");
        let id = receipt.inserted_id.expect("inserted id");
        let app = actix_test::init_service(test_app(state)).await;

        let patch = actix_test::TestRequest::patch()
            .uri(&format!("/admin/update-request-asset-info/{id}"))
            .insert_header(bearer(&token))
            .set_json(json!({ "status": "Approved" }))
            .to_request();
        let response = actix_test::call_service(&app, patch).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("body");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("out_of_stock")
        );
    }

    #[actix_web::test]
    async fn patching_back_to_pending_is_rejected() {
        let state = test_state();
        let token = seed_admin(&state, "boss@x.com").await;
        let app = actix_test::init_service(test_app(state)).await;

        let patch = actix_test::TestRequest::patch()
            .uri(&format!(
                "/admin/update-request-asset-info/{}",
                Uuid::new_v4()
            ))
            .insert_header(bearer(&token))
            .set_json(json!({ "status": "Pending" }))
            .to_request();
        let response = actix_test::call_service(&app, patch).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn requester_search_matches_name_or_email_case_insensitively() {
        let state = test_state();
        let token = seed_admin(&state, "boss@x.com").await;
        let asset = seed_catalog_asset(&state, "Laptop Dell", 5).await;
        state
            .lifecycle
            .submit(&serde_json::from_value(request_body(&asset)).expect("request"))
            .await
            .expect("submit");
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get()
            .uri("/admin/employee-all-asset-request?q=ADA")
            .insert_header(bearer(&token))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("body");
        assert_eq!(value.as_array().expect("array").len(), 1);
    }

    #[actix_web::test]
    async fn split_listing_keys_are_camel_case() {
        let state = test_state();
        let token = seed_admin(&state, "boss@x.com").await;
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get()
            .uri("/admin/all-asset-request/boss@x.com")
            .insert_header(bearer(&token))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("body");
        assert!(value.get("returnable").is_some());
        assert!(value.get("nonReturnable").is_some());
    }
}
