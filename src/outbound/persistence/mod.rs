//! Document-store adapters.
//!
//! The adapters here are thin: they translate port calls into reads and
//! filtered writes against their collection and map nothing else. Business
//! rules stay in the domain services.
//!
//! The in-memory collections are the process-wide store: constructed once at
//! startup, shared behind `Arc` for the process lifetime, with no explicit
//! close path.

mod memory;

pub use memory::{
    MemoryAssetStore, MemoryCustomRequestStore, MemoryPaymentStore, MemoryRequestStore,
    MemoryTicketStore, MemoryUserStore,
};
