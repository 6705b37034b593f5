//! Signed access tokens for the authentication gate.
//!
//! Tokens are HS256 JWTs signed with a process-wide symmetric secret and a
//! fixed one-hour expiry. Issuance signs whatever claims object the caller
//! supplies; callers are trusted to present only their own verified identity.
//! Role checks never trust token contents, so a forged role claim buys
//! nothing past the directory lookup.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::Error;

/// Fixed token lifetime: one hour from issuance.
pub const TOKEN_TTL_SECS: u64 = 3600;

/// Claims read back from a verified token.
///
/// Issuance accepts arbitrary claim objects; verification only requires the
/// fields the authorisation model relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub email: String,
    pub exp: u64,
}

/// Issues and verifies access tokens with a shared symmetric secret.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenCodec {
    /// Build a codec from the shared secret bytes.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Sign the supplied claims object, stamping `iat` and a one-hour `exp`.
    ///
    /// Fails with [`ErrorCode::InvalidRequest`] when the claims payload is
    /// not a JSON object.
    pub fn issue(&self, claims: &Value) -> Result<String, Error> {
        let mut object = claims
            .as_object()
            .cloned()
            .ok_or_else(|| Error::invalid_request("token claims must be a JSON object"))?;
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        object.insert("iat".into(), Value::from(now));
        object.insert("exp".into(), Value::from(now + TOKEN_TTL_SECS));
        encode(&Header::default(), &object, &self.encoding)
            .map_err(|err| Error::internal(format!("token signing failed: {err}")))
    }

    /// Verify the signature and expiry of `token` and return its claims.
    ///
    /// Any failure (bad signature, expiry, missing email claim) collapses to
    /// a single [`ErrorCode::Unauthorized`] so callers cannot probe which
    /// check rejected the token.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| Error::unauthorized("unauthorized access"))
    }
}
