//! Custom (non-catalog) request API handlers.

use actix_web::{get, patch, post, web};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{InsertReceipt, UpdateReceipt};
use crate::domain::{CustomAssetRequest, CustomRequestStatus, Error, Identity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Body for `PATCH /admin/update-custom-request-asset-info/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomStatusPatch {
    pub status: CustomRequestStatus,
}

/// Submit a request for an item outside the catalog.
#[utoipa::path(
    post,
    path = "/employee/create-custom-request",
    request_body = CustomAssetRequest,
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertReceipt),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["custom-requests"],
    operation_id = "submitCustomRequest",
    security(("bearerAuth" = []))
)]
#[post("/employee/create-custom-request")]
pub async fn submit_custom_request(
    state: web::Data<HttpState>,
    _identity: Identity,
    request: web::Json<CustomAssetRequest>,
) -> ApiResult<web::Json<InsertReceipt>> {
    let receipt = state.lifecycle.submit_custom(&request).await?;
    Ok(web::Json(receipt))
}

/// Custom requests owned by an admin.
#[utoipa::path(
    get,
    path = "/admin/all-custom-asset-request/{email}",
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, description = "Custom requests for the admin", body = [CustomAssetRequest]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["custom-requests"],
    operation_id = "adminCustomRequests",
    security(("bearerAuth" = []))
)]
#[get("/admin/all-custom-asset-request/{email}")]
pub async fn admin_custom_requests(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<CustomAssetRequest>>> {
    state.gate.authorize_admin(&identity).await?;
    let requests = state.lifecycle.custom_for_admin(&email).await?;
    Ok(web::Json(requests))
}

/// Custom requests submitted by a requester.
#[utoipa::path(
    get,
    path = "/employee/my-all-custom-asset-request/{email}",
    params(("email" = String, Path, description = "Requester email")),
    responses(
        (status = 200, description = "Custom requests for the requester", body = [CustomAssetRequest]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["custom-requests"],
    operation_id = "myCustomRequests",
    security(("bearerAuth" = []))
)]
#[get("/employee/my-all-custom-asset-request/{email}")]
pub async fn my_custom_requests(
    state: web::Data<HttpState>,
    _identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<CustomAssetRequest>>> {
    let requests = state.lifecycle.custom_for_requester(&email).await?;
    Ok(web::Json(requests))
}

/// Decide a pending custom request.
///
/// Settled requests match nothing; retries acknowledge as zero-effect
/// updates.
#[utoipa::path(
    patch,
    path = "/admin/update-custom-request-asset-info/{id}",
    params(("id" = Uuid, Path, description = "Custom request id")),
    request_body = CustomStatusPatch,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateReceipt),
        (status = 400, description = "Invalid transition", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["custom-requests"],
    operation_id = "decideCustomRequest",
    security(("bearerAuth" = []))
)]
#[patch("/admin/update-custom-request-asset-info/{id}")]
pub async fn decide_custom_request(
    state: web::Data<HttpState>,
    identity: Identity,
    id: web::Path<Uuid>,
    patch: web::Json<CustomStatusPatch>,
) -> ApiResult<web::Json<UpdateReceipt>> {
    state.gate.authorize_admin(&identity).await?;
    let receipt = state.lifecycle.decide_custom(*id, patch.status).await?;
    Ok(web::Json(receipt))
}
