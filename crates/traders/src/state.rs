//! Shared application state.

use std::sync::Arc;

use spazalink_core::storage::TraderRepository;

use crate::storage::inmemory::InMemoryTraderRepository;

/// Shared application state, cloned into each request handler.
#[derive(Clone)]
pub struct AppState {
    pub traders: Arc<dyn TraderRepository>,
}

impl AppState {
    /// Creates state backed by the given repository.
    pub fn new(traders: Arc<dyn TraderRepository>) -> Self {
        Self { traders }
    }

    /// Creates state backed by an empty in-memory repository (tests and
    /// local development).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTraderRepository::new()))
    }
}
