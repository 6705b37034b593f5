//! OpenAPI documentation configuration.
//!
//! Generates the specification served by Swagger UI in debug builds. Every
//! handler in the inbound layer registers its path here; bearer token
//! authentication is declared once as the default security scheme.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::ports::{
    InsertReceipt, PaymentIntent, PaymentRecord, Ticket, UpdateReceipt,
};
use crate::domain::{
    Asset, AssetRequest, AssetType, CustomAssetRequest, CustomRequestStatus, Error, ErrorCode,
    RequestSplit, RequestStatus, Role, User,
};
use crate::inbound::http::collaborators::{PaymentIntentBody, PaymentIntentResponse};
use crate::inbound::http::custom_requests::CustomStatusPatch;
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::requests::StatusPatch;
use crate::inbound::http::tokens::TokenResponse;
use crate::inbound::http::users::{OnboardingBody, ProfileBody, QuotaBody, RemainingQuotaBody};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token issued by POST /jwt."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Asset manager API",
        description = "HTTP interface for the organisation asset inventory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("bearerAuth" = [])),
    paths(
        crate::inbound::http::health::banner,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
        crate::inbound::http::tokens::issue_token,
        crate::inbound::http::users::add_user,
        crate::inbound::http::users::user_role,
        crate::inbound::http::users::user_data,
        crate::inbound::http::users::list_unassigned,
        crate::inbound::http::users::list_team,
        crate::inbound::http::users::extend_employee_limit,
        crate::inbound::http::users::update_employee_limit,
        crate::inbound::http::users::update_employee_info,
        crate::inbound::http::users::update_profile,
        crate::inbound::http::assets::add_asset,
        crate::inbound::http::assets::employee_asset_list,
        crate::inbound::http::assets::admin_asset_list,
        crate::inbound::http::assets::limited_asset_list,
        crate::inbound::http::assets::all_assets,
        crate::inbound::http::requests::submit_request,
        crate::inbound::http::requests::my_asset_list,
        crate::inbound::http::requests::requested_asset_list,
        crate::inbound::http::requests::search_requests,
        crate::inbound::http::requests::my_pending_requests,
        crate::inbound::http::requests::pending_queue,
        crate::inbound::http::requests::split_requests,
        crate::inbound::http::requests::my_monthly_requests,
        crate::inbound::http::requests::update_request_status,
        crate::inbound::http::custom_requests::submit_custom_request,
        crate::inbound::http::custom_requests::admin_custom_requests,
        crate::inbound::http::custom_requests::my_custom_requests,
        crate::inbound::http::custom_requests::decide_custom_request,
        crate::inbound::http::collaborators::create_payment_intent,
        crate::inbound::http::collaborators::record_payment,
        crate::inbound::http::collaborators::recent_payments,
        crate::inbound::http::collaborators::log_ticket,
    ),
    components(schemas(
        Error,
        ErrorCode,
        User,
        Role,
        Asset,
        AssetType,
        AssetRequest,
        RequestStatus,
        RequestSplit,
        CustomAssetRequest,
        CustomRequestStatus,
        InsertReceipt,
        UpdateReceipt,
        PaymentRecord,
        PaymentIntent,
        Ticket,
        TokenResponse,
        HealthStatus,
        QuotaBody,
        RemainingQuotaBody,
        OnboardingBody,
        ProfileBody,
        StatusPatch,
        CustomStatusPatch,
        PaymentIntentBody,
        PaymentIntentResponse,
    )),
    tags(
        (name = "health", description = "Service banner and probes"),
        (name = "auth", description = "Access token issuance"),
        (name = "users", description = "Directory, onboarding, and quotas"),
        (name = "assets", description = "Inventory catalog"),
        (name = "requests", description = "Asset request lifecycle"),
        (name = "custom-requests", description = "Non-catalog requests"),
        (name = "payments", description = "Payment intents and records"),
        (name = "tickets", description = "Support tickets")
    )
)]
pub struct ApiDoc;
