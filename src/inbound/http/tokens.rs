//! Token issuance endpoint.
//!
//! ```text
//! POST /jwt {"email":"user@example.com"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Response body for `POST /jwt`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Sign the submitted claims into a one-hour access token.
///
/// The body is taken as-is apart from the stamped timestamps; identity is
/// proven later, per request, when the token is presented.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = Value,
    responses(
        (status = 200, description = "Signed access token", body = TokenResponse),
        (status = 400, description = "Claims are not a JSON object", body = Error)
    ),
    tags = ["auth"],
    operation_id = "issueToken",
    security([])
)]
#[post("/jwt")]
pub async fn issue_token(
    state: web::Data<HttpState>,
    claims: web::Json<Value>,
) -> ApiResult<web::Json<TokenResponse>> {
    let token = state.gate.issue(&claims)?;
    Ok(web::Json(TokenResponse { token }))
}
