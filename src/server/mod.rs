//! Application assembly: route registration and middleware.

pub mod config;

pub use config::{PaymentGatewayConfig, ServerConfig};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{assets, collaborators, custom_requests, health, requests, tokens, users};
use crate::middleware::RequestId;

/// Build the application with every route and middleware registered.
///
/// Shared between `main` and the integration tests so both serve the same
/// surface. Swagger UI is mounted in debug builds only.
pub fn app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    #[allow(unused_mut)]
    let mut app = App::new()
        .app_data(state)
        .wrap(RequestId)
        .service(health::banner)
        .service(health::live)
        .service(health::ready)
        .service(tokens::issue_token)
        .service(users::add_user)
        .service(users::user_role)
        .service(users::user_data)
        .service(users::list_unassigned)
        .service(users::list_team)
        .service(users::extend_employee_limit)
        .service(users::update_employee_limit)
        .service(users::update_employee_info)
        .service(users::update_profile)
        .service(assets::add_asset)
        .service(assets::employee_asset_list)
        .service(assets::admin_asset_list)
        .service(assets::limited_asset_list)
        .service(assets::all_assets)
        .service(requests::submit_request)
        .service(requests::my_asset_list)
        .service(requests::requested_asset_list)
        .service(requests::search_requests)
        .service(requests::my_pending_requests)
        .service(requests::pending_queue)
        .service(requests::split_requests)
        .service(requests::my_monthly_requests)
        .service(requests::update_request_status)
        .service(custom_requests::submit_custom_request)
        .service(custom_requests::admin_custom_requests)
        .service(custom_requests::my_custom_requests)
        .service(custom_requests::decide_custom_request)
        .service(collaborators::create_payment_intent)
        .service(collaborators::record_payment)
        .service(collaborators::recent_payments)
        .service(collaborators::log_ticket);

    #[cfg(debug_assertions)]
    {
        app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
