//! In-memory product repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use spazalink_core::product::{filter_by_price, AccessPlan, Product, ProductFilter};
use spazalink_core::storage::{ProductRepository, Result};

/// In-memory storage backend for tests and local development.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let products = self.products.read().await;

        // Same two-tier strategy as the DynamoDB backend: narrow by exact
        // category when given, otherwise take everything, then apply the
        // residual price filter.
        let matched: Vec<Product> = match filter.access_plan() {
            AccessPlan::CategoryQuery(category) => products
                .values()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
            AccessPlan::FullScan => products.values().cloned().collect(),
        };

        Ok(filter_by_price(matched, filter.min_price, filter.max_price))
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn create_product(&self, product: &Product) -> Result<Product> {
        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product.clone())
    }
}
