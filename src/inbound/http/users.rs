//! Directory API handlers: registration, lookups, onboarding, and the
//! per-admin employee quota.

use actix_web::{get, patch, post, web};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{InsertReceipt, OnboardingUpdate, ProfileUpdate, UpdateReceipt};
use crate::domain::{Error, Identity, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Body for `PATCH /admin/extend-employee-limit/{email}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuotaBody {
    pub employee_limit_total: u32,
    pub employee_limit_remaining: u32,
}

/// Body for `PATCH /admin/update-employeelimit/{email}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemainingQuotaBody {
    pub employee_limit_remaining: u32,
}

/// Body for `PATCH /admin/update-employeeInfo/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingBody {
    #[serde(default)]
    pub have_admin: Option<String>,
    #[serde(default)]
    pub companylogo: Option<String>,
    #[serde(default)]
    pub team: bool,
}

/// Body for `PATCH /users/update-profile/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
}

/// Record a user on first sign-in.
///
/// A repeated registration acknowledges with a null `insertedId` and an
/// explanatory message instead of failing.
#[utoipa::path(
    post,
    path = "/add-users",
    request_body = User,
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertReceipt),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["users"],
    operation_id = "addUser",
    security(("bearerAuth" = []))
)]
#[post("/add-users")]
pub async fn add_user(
    state: web::Data<HttpState>,
    _identity: Identity,
    user: web::Json<User>,
) -> ApiResult<web::Json<InsertReceipt>> {
    let receipt = state.directory.register(&user).await?;
    Ok(web::Json(receipt))
}

/// Raw user lookup by email, `null` when unknown.
#[utoipa::path(
    get,
    path = "/user-role/{email}",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "User record or null", body = Option<User>)),
    tags = ["users"],
    operation_id = "userRole",
    security([])
)]
#[get("/user-role/{email}")]
pub async fn user_role(
    state: web::Data<HttpState>,
    email: web::Path<String>,
) -> ApiResult<web::Json<Option<User>>> {
    let user = state.directory.find_by_email(&email).await?;
    Ok(web::Json(user))
}

/// Raw user lookup by email, `null` when unknown.
#[utoipa::path(
    get,
    path = "/userData/{email}",
    params(("email" = String, Path, description = "User email")),
    responses((status = 200, description = "User record or null", body = Option<User>)),
    tags = ["users"],
    operation_id = "userData",
    security([])
)]
#[get("/userData/{email}")]
pub async fn user_data(
    state: web::Data<HttpState>,
    email: web::Path<String>,
) -> ApiResult<web::Json<Option<User>>> {
    let user = state.directory.find_by_email(&email).await?;
    Ok(web::Json(user))
}

/// Users not yet onboarded onto any team.
#[utoipa::path(
    get,
    path = "/admin/add-employees",
    responses(
        (status = 200, description = "Unassigned users", body = [User]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUnassignedUsers",
    security(("bearerAuth" = []))
)]
#[get("/admin/add-employees")]
pub async fn list_unassigned(
    state: web::Data<HttpState>,
    identity: Identity,
) -> ApiResult<web::Json<Vec<User>>> {
    state.gate.authorize_admin(&identity).await?;
    let users = state.directory.list_unassigned().await?;
    Ok(web::Json(users))
}

/// Employees onboarded under the given admin.
#[utoipa::path(
    get,
    path = "/admin/all-employees/{email}",
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, description = "Team members", body = [User]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["users"],
    operation_id = "listTeam",
    security(("bearerAuth" = []))
)]
#[get("/admin/all-employees/{email}")]
pub async fn list_team(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<User>>> {
    state.gate.authorize_admin(&identity).await?;
    let users = state.directory.list_team(&email).await?;
    Ok(web::Json(users))
}

/// Overwrite both quota fields on an admin's record.
#[utoipa::path(
    patch,
    path = "/admin/extend-employee-limit/{email}",
    params(("email" = String, Path, description = "Admin email")),
    request_body = QuotaBody,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateReceipt),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["users"],
    operation_id = "extendEmployeeLimit",
    security(("bearerAuth" = []))
)]
#[patch("/admin/extend-employee-limit/{email}")]
pub async fn extend_employee_limit(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
    body: web::Json<QuotaBody>,
) -> ApiResult<web::Json<UpdateReceipt>> {
    state.gate.authorize_admin(&identity).await?;
    let receipt = state
        .directory
        .extend_quota(&email, body.employee_limit_total, body.employee_limit_remaining)
        .await?;
    Ok(web::Json(receipt))
}

/// Overwrite only the remaining-quota field.
#[utoipa::path(
    patch,
    path = "/admin/update-employeelimit/{email}",
    params(("email" = String, Path, description = "Admin email")),
    request_body = RemainingQuotaBody,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateReceipt),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateEmployeeLimit",
    security(("bearerAuth" = []))
)]
#[patch("/admin/update-employeelimit/{email}")]
pub async fn update_employee_limit(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
    body: web::Json<RemainingQuotaBody>,
) -> ApiResult<web::Json<UpdateReceipt>> {
    state.gate.authorize_admin(&identity).await?;
    let receipt = state
        .directory
        .set_quota_remaining(&email, body.employee_limit_remaining)
        .await?;
    Ok(web::Json(receipt))
}

/// Onboarding edit: assign an employee to an admin's organisation.
#[utoipa::path(
    patch,
    path = "/admin/update-employeeInfo/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = OnboardingBody,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateReceipt),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateEmployeeInfo",
    security(("bearerAuth" = []))
)]
#[patch("/admin/update-employeeInfo/{id}")]
pub async fn update_employee_info(
    state: web::Data<HttpState>,
    identity: Identity,
    id: web::Path<Uuid>,
    body: web::Json<OnboardingBody>,
) -> ApiResult<web::Json<UpdateReceipt>> {
    state.gate.authorize_admin(&identity).await?;
    let body = body.into_inner();
    let update = OnboardingUpdate {
        have_admin: body.have_admin,
        companylogo: body.companylogo,
        team: body.team,
    };
    let receipt = state.directory.update_onboarding(*id, &update).await?;
    Ok(web::Json(receipt))
}

/// Profile edit on the user's own record.
#[utoipa::path(
    patch,
    path = "/users/update-profile/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = ProfileBody,
    responses((status = 200, description = "Update acknowledgement", body = UpdateReceipt)),
    tags = ["users"],
    operation_id = "updateProfile",
    security([])
)]
#[patch("/users/update-profile/{id}")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    body: web::Json<ProfileBody>,
) -> ApiResult<web::Json<UpdateReceipt>> {
    let body = body.into_inner();
    let update = ProfileUpdate {
        name: body.name,
        dob: body.dob,
    };
    let receipt = state.directory.update_profile(*id, &update).await?;
    Ok(web::Json(receipt))
}
