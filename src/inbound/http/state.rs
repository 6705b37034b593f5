//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and only depend on the
//! domain services and ports, so they stay testable without real I/O. The
//! store handles are constructed once and shared for the process lifetime;
//! nothing reaches for ambient globals.

use std::sync::Arc;

use crate::domain::ports::{PaymentGateway, PaymentStore, TicketStore};
use crate::domain::{AuthGate, Directory, InventoryLedger, RequestLifecycle, TokenCodec};
use crate::outbound::gateway::FixturePaymentGateway;
use crate::outbound::persistence::{
    MemoryAssetStore, MemoryCustomRequestStore, MemoryPaymentStore, MemoryRequestStore,
    MemoryTicketStore, MemoryUserStore,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub gate: Arc<AuthGate>,
    pub directory: Arc<Directory>,
    pub inventory: Arc<InventoryLedger>,
    pub lifecycle: Arc<RequestLifecycle>,
    pub payments: Arc<dyn PaymentStore>,
    pub tickets: Arc<dyn TicketStore>,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl HttpState {
    /// Wire the full service graph over in-memory collections.
    ///
    /// This is the production composition for the document-store-less
    /// deployment and the fixture composition for tests; swapping in another
    /// store only means passing different port implementations here.
    pub fn with_memory_stores(token_secret: &[u8], gateway: Arc<dyn PaymentGateway>) -> Self {
        let users = Arc::new(MemoryUserStore::new());
        let assets = Arc::new(MemoryAssetStore::new());
        let requests = Arc::new(MemoryRequestStore::new());
        let custom = Arc::new(MemoryCustomRequestStore::new());

        let inventory = Arc::new(InventoryLedger::new(assets));
        Self {
            gate: Arc::new(AuthGate::new(TokenCodec::new(token_secret), users.clone())),
            directory: Arc::new(Directory::new(users)),
            inventory: inventory.clone(),
            lifecycle: Arc::new(RequestLifecycle::new(requests, custom, inventory)),
            payments: Arc::new(MemoryPaymentStore::new()),
            tickets: Arc::new(MemoryTicketStore::new()),
            gateway,
        }
    }

    /// Memory-backed state with the fixture payment gateway.
    pub fn for_tests(token_secret: &[u8]) -> Self {
        Self::with_memory_stores(token_secret, Arc::new(FixturePaymentGateway))
    }
}
