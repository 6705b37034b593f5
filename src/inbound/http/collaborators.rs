//! Payment and support ticket handlers.
//!
//! Payments and tickets are pass-through documents; the only logic here is
//! the amount conversion handed to the payment gateway.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{InsertReceipt, PaymentRecord, Ticket};
use crate::domain::{Error, Identity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// The admin payment listing is capped at the five most recent records.
pub const RECENT_PAYMENTS_LIMIT: usize = 5;

/// Body for `POST /create-payment-intent`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentIntentBody {
    /// Package price in whole currency units.
    pub price: f64,
}

/// Response body carrying the processor's client-side handle.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// Create a payment intent for a package purchase.
///
/// The price is converted to integer cents before the gateway call; amounts
/// that round below one cent are rejected instead of being forwarded.
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = PaymentIntentBody,
    responses(
        (status = 200, description = "Client secret for the intent", body = PaymentIntentResponse),
        (status = 400, description = "Amount too small", body = Error)
    ),
    tags = ["payments"],
    operation_id = "createPaymentIntent",
    security([])
)]
#[post("/create-payment-intent")]
pub async fn create_payment_intent(
    state: web::Data<HttpState>,
    body: web::Json<PaymentIntentBody>,
) -> ApiResult<web::Json<PaymentIntentResponse>> {
    let amount_cents = (body.price * 100.0).round() as i64;
    if amount_cents < 1 {
        return Err(Error::invalid_request("amount must be at least one cent"));
    }
    let intent = state.gateway.create_intent(amount_cents).await?;
    Ok(web::Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

/// Record a completed payment as submitted.
#[utoipa::path(
    post,
    path = "/payment-info",
    request_body = PaymentRecord,
    responses((status = 200, description = "Insert acknowledgement", body = InsertReceipt)),
    tags = ["payments"],
    operation_id = "recordPayment",
    security([])
)]
#[post("/payment-info")]
pub async fn record_payment(
    state: web::Data<HttpState>,
    record: web::Json<PaymentRecord>,
) -> ApiResult<web::Json<InsertReceipt>> {
    let id = state.payments.insert(&record).await?;
    Ok(web::Json(InsertReceipt::inserted(id)))
}

/// The five most recent payment records for an email, newest first.
#[utoipa::path(
    get,
    path = "/admin/payment-info/{email}",
    params(("email" = String, Path, description = "Payer email")),
    responses(
        (status = 200, description = "Recent payments", body = [PaymentRecord]),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["payments"],
    operation_id = "recentPayments",
    security(("bearerAuth" = []))
)]
#[get("/admin/payment-info/{email}")]
pub async fn recent_payments(
    state: web::Data<HttpState>,
    identity: Identity,
    email: web::Path<String>,
) -> ApiResult<web::Json<Vec<PaymentRecord>>> {
    state.gate.authorize_admin(&identity).await?;
    let records = state
        .payments
        .recent_by_email(&email, RECENT_PAYMENTS_LIMIT)
        .await?;
    Ok(web::Json(records))
}

/// Log a support ticket as submitted.
#[utoipa::path(
    post,
    path = "/employee/ticket",
    request_body = Ticket,
    responses((status = 200, description = "Insert acknowledgement", body = InsertReceipt)),
    tags = ["tickets"],
    operation_id = "logTicket",
    security([])
)]
#[post("/employee/ticket")]
pub async fn log_ticket(
    state: web::Data<HttpState>,
    ticket: web::Json<Ticket>,
) -> ApiResult<web::Json<InsertReceipt>> {
    let id = state.tickets.insert(&ticket).await?;
    Ok(web::Json(InsertReceipt::inserted(id)))
}
