//! Inventory API handlers: catalog entry and the asset listings.

use actix_web::{get, post, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::ports::{AssetFilter, InsertReceipt};
use crate::domain::{Asset, AssetType, Error, Identity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query filters shared by the asset listings.
///
/// An empty `q` matches every asset name; clients send it that way when the
/// search box is blank.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AssetListQuery {
    /// Case-insensitive asset name substring.
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
}

impl AssetListQuery {
    fn into_filter(self) -> AssetFilter {
        AssetFilter {
            name_contains: self.q,
            asset_type: self.asset_type,
            ..AssetFilter::default()
        }
    }
}

/// Record a new catalog entry.
#[utoipa::path(
    post,
    path = "/add-asset",
    request_body = Asset,
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertReceipt),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["assets"],
    operation_id = "addAsset",
    security(("bearerAuth" = []))
)]
#[post("/add-asset")]
pub async fn add_asset(
    state: web::Data<HttpState>,
    identity: Identity,
    asset: web::Json<Asset>,
) -> ApiResult<web::Json<InsertReceipt>> {
    state.gate.authorize_admin(&identity).await?;
    let receipt = state.inventory.add(&asset).await?;
    Ok(web::Json(receipt))
}

/// Catalog browse for employees, filtered by name substring and type.
#[utoipa::path(
    get,
    path = "/employee/asset-list",
    params(AssetListQuery),
    responses(
        (status = 200, description = "Matching assets", body = [Asset]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["assets"],
    operation_id = "employeeAssetList",
    security(("bearerAuth" = []))
)]
#[get("/employee/asset-list")]
pub async fn employee_asset_list(
    state: web::Data<HttpState>,
    _identity: Identity,
    query: web::Query<AssetListQuery>,
) -> ApiResult<web::Json<Vec<Asset>>> {
    let assets = state.inventory.search(query.into_inner().into_filter()).await?;
    Ok(web::Json(assets))
}

/// An admin's own assets, filtered by name substring and type.
#[utoipa::path(
    get,
    path = "/admin/asset-list/{email}",
    params(("email" = String, Path, description = "Admin email"), AssetListQuery),
    responses(
        (status = 200, description = "Matching assets", body = [Asset]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["assets"],
    operation_id = "adminAssetList",
    security(("bearerAuth" = []))
)]
#[get("/admin/asset-list/{email}")]
pub async fn admin_asset_list(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
    query: web::Query<AssetListQuery>,
) -> ApiResult<web::Json<Vec<Asset>>> {
    state.gate.authorize_admin(&identity).await?;
    let mut filter = query.into_inner().into_filter();
    filter.admin = Some(email.into_inner());
    let assets = state.inventory.search(filter).await?;
    Ok(web::Json(assets))
}

/// An admin's assets running low on stock.
#[utoipa::path(
    get,
    path = "/admin/limited-asset/{email}",
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, description = "Assets with quantity under the threshold", body = [Asset]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["assets"],
    operation_id = "limitedAssetList",
    security(("bearerAuth" = []))
)]
#[get("/admin/limited-asset/{email}")]
pub async fn limited_asset_list(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<Asset>>> {
    state.gate.authorize_admin(&identity).await?;
    let assets = state.inventory.list_low_stock(&email).await?;
    Ok(web::Json(assets))
}

/// Every asset owned by an admin.
#[utoipa::path(
    get,
    path = "/admin/all-assets/{email}",
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, description = "All assets for the admin", body = [Asset]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["assets"],
    operation_id = "allAssets",
    security(("bearerAuth" = []))
)]
#[get("/admin/all-assets/{email}")]
pub async fn all_assets(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<Asset>>> {
    state.gate.authorize_admin(&identity).await?;
    let filter = AssetFilter {
        admin: Some(email.into_inner()),
        ..AssetFilter::default()
    };
    let assets = state.inventory.search(filter).await?;
    Ok(web::Json(assets))
}
