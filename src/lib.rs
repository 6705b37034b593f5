//! Organisation asset inventory backend.
//!
//! Employees request assets from a per-admin catalog; admins decide those
//! requests, with approval coupled to a guarded stock decrement. The domain
//! layer owns the rules and talks to persistence only through port traits;
//! inbound HTTP and outbound store/gateway adapters live at the edges.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::RequestId;
