//! Bearer-token extraction for authenticated handlers.
//!
//! [`Identity`] implements `FromRequest`, so declaring it as a handler
//! parameter is what marks an endpoint as token-protected. The decoded
//! identity travels as an explicit value from here on; nothing is attached
//! to ambient request state.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, Identity};

use super::state::HttpState;

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequest for Identity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<HttpState>>() else {
            return ready(Err(Error::internal("HTTP state is not configured")));
        };
        ready(state.gate.authenticate(bearer_token(req)))
    }
}
