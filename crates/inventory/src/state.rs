//! Shared application state.

use std::sync::Arc;

use spazalink_core::storage::ProductRepository;

use crate::storage::inmemory::InMemoryProductRepository;

/// Shared application state, cloned into each request handler.
///
/// Holds the product repository as a trait object so handlers stay
/// agnostic of the storage backend.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    /// Creates state backed by the given repository.
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Creates state backed by an empty in-memory repository (tests and
    /// local development).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()))
    }
}
