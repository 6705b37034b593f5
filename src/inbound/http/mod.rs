//! HTTP inbound adapter exposing the REST endpoints.

pub mod assets;
pub mod collaborators;
pub mod custom_requests;
pub mod error;
pub mod health;
pub mod identity;
pub mod requests;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod tokens;
pub mod users;

pub use error::ApiResult;
pub use state::HttpState;
