//! Domain entities, services, and ports.
//!
//! Purpose: keep every business rule — the request state machine, the stock
//! guard, the authorisation model — behind framework-free types. Inbound
//! adapters map transport payloads onto these types; outbound adapters
//! implement the ports.

pub mod asset;
pub mod auth_gate;
pub mod directory;
pub mod error;
pub mod inventory;
pub mod lifecycle;
pub mod ports;
pub mod request;
pub mod token;
pub mod user;

pub use self::asset::{Asset, AssetType};
pub use self::auth_gate::{AuthGate, Identity};
pub use self::directory::Directory;
pub use self::error::{Error, ErrorCode};
pub use self::inventory::{InventoryLedger, LOW_STOCK_THRESHOLD};
pub use self::lifecycle::{RequestLifecycle, RequestSplit};
pub use self::request::{AssetRequest, CustomAssetRequest, CustomRequestStatus, RequestStatus};
pub use self::token::{TokenClaims, TokenCodec};
pub use self::user::{Role, User};

#[cfg(test)]
mod lifecycle_tests;
