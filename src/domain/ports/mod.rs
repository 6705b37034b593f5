//! Store-access capabilities consumed by the domain services.
//!
//! The backing document store is an external collaborator; these traits are
//! the only surface the domain talks to. Adapters translate between these
//! calls and the concrete store. Updates acknowledge with matched/modified
//! counts rather than returning entities, and an update against a missing
//! document is a zero-effect success.

mod asset_store;
mod collaborator_store;
mod custom_request_store;
mod payment_gateway;
mod receipt;
mod request_store;
mod user_store;

pub use asset_store::{AssetFilter, AssetStore, StockAdjustment};
pub use collaborator_store::{PaymentRecord, PaymentStore, Ticket, TicketStore};
pub use custom_request_store::CustomRequestStore;
pub use payment_gateway::{GatewayError, PaymentGateway, PaymentIntent};
pub use receipt::{InsertReceipt, StoreError, StoreResult, UpdateReceipt};
pub use request_store::{RequestFilter, RequestStore};
pub use user_store::{OnboardingUpdate, ProfileUpdate, UserFilter, UserStore};

#[cfg(test)]
pub use user_store::MockUserStore;
