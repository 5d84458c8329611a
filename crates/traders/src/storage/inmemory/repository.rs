//! In-memory trader repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use spazalink_core::storage::{RepositoryError, Result, TraderRepository};
use spazalink_core::trader::Trader;

/// In-memory storage backend for tests and local development.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTraderRepository {
    traders: Arc<RwLock<HashMap<Uuid, Trader>>>,
}

impl InMemoryTraderRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TraderRepository for InMemoryTraderRepository {
    async fn create_trader(&self, trader: &Trader) -> Result<Trader> {
        let trader = trader.clone().registration_defaults();
        let mut traders = self.traders.write().await;
        traders.insert(trader.id, trader.clone());
        Ok(trader)
    }

    async fn get_trader(&self, id: Uuid) -> Result<Option<Trader>> {
        let traders = self.traders.read().await;
        Ok(traders.get(&id).cloned())
    }

    async fn get_traders_by_area(&self, area: &str) -> Result<Vec<Trader>> {
        if area.trim().is_empty() {
            return Err(RepositoryError::InvalidArgument(
                "area must not be empty".to_string(),
            ));
        }

        let traders = self.traders.read().await;
        Ok(traders
            .values()
            .filter(|t| t.area == area)
            .cloned()
            .collect())
    }
}
