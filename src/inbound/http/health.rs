//! Service banner and health probes.

use actix_web::{HttpResponse, get};
use serde::Serialize;
use utoipa::ToSchema;

/// Probe response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Root banner confirming the service is up.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = String)),
    tags = ["health"],
    operation_id = "banner",
    security([])
)]
#[get("/")]
pub async fn banner() -> HttpResponse {
    HttpResponse::Ok().body("Asset manager server is running")
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    responses((status = 200, description = "Process is live", body = HealthStatus)),
    tags = ["health"],
    operation_id = "healthLive",
    security([])
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus { status: "ok" })
}

/// Readiness probe.
///
/// The in-memory stores carry no startup dependency, so readiness follows
/// liveness; a store adapter with a real connection would report here.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses((status = 200, description = "Ready to serve traffic", body = HealthStatus)),
    tags = ["health"],
    operation_id = "healthReady",
    security([])
)]
#[get("/health/ready")]
pub async fn ready() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus { status: "ok" })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::{App, test as actix_test};

    #[actix_web::test]
    async fn probes_answer_ok() {
        let app =
            actix_test::init_service(App::new().service(banner).service(live).service(ready))
                .await;
        for uri in ["/", "/health/live", "/health/ready"] {
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::get().uri(uri).to_request(),
            )
            .await;
            assert!(response.status().is_success(), "{uri}");
        }
    }
}
