//! Authentication and authorisation gate.
//!
//! `authenticate` proves who the caller is from a bearer token;
//! `authorize_admin` proves the caller may use admin-scoped operations by
//! loading their directory record. The second check always runs against the
//! directory, never against token contents, so a forged role claim in a
//! validly-signed token buys nothing.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::ports::UserStore;
use crate::domain::{Error, TokenCodec};

/// Verified caller identity, passed by value through the call chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    email: String,
}

impl Identity {
    /// Email claim the token was issued for.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Gate in front of every authenticated operation.
pub struct AuthGate {
    codec: TokenCodec,
    users: Arc<dyn UserStore>,
}

impl AuthGate {
    pub fn new(codec: TokenCodec, users: Arc<dyn UserStore>) -> Self {
        Self { codec, users }
    }

    /// Sign caller-supplied claims into a one-hour access token.
    pub fn issue(&self, claims: &Value) -> Result<String, Error> {
        self.codec.issue(claims)
    }

    /// Validate a bearer token and derive the caller's identity.
    ///
    /// A missing token is the same `unauthorized` failure as an invalid one.
    pub fn authenticate(&self, token: Option<&str>) -> Result<Identity, Error> {
        let token = token.ok_or_else(|| Error::unauthorized("unauthorized access"))?;
        let claims = self.codec.verify(token)?;
        Ok(Identity {
            email: claims.email,
        })
    }

    /// Confirm the identity belongs to an admin, reading the directory.
    ///
    /// Must run after [`AuthGate::authenticate`] and before any admin-scoped
    /// operation. Unknown users and non-admin roles both fail `forbidden`.
    pub async fn authorize_admin(&self, identity: &Identity) -> Result<(), Error> {
        let user = self.users.find_by_email(identity.email()).await?;
        match user {
            Some(user) if user.is_admin() => Ok(()),
            _ => Err(Error::forbidden("forbidden access")),
        }
    }
}
