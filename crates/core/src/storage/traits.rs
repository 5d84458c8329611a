use async_trait::async_trait;
use uuid::Uuid;

use crate::product::{Product, ProductFilter};
use crate::trader::Trader;

use super::Result;

/// Repository contract for product persistence.
///
/// Every operation is a self-contained request to the store; there is no
/// shared mutable state and no retry. Absence is `Ok(None)`, never an
/// error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Searches products by the supplied predicates.
    ///
    /// Routes to the category index when an exact category is given,
    /// otherwise scans the whole collection; price bounds are applied as a
    /// residual in-memory filter in both cases.
    async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    /// Point read by product id.
    async fn get_product(&self, id: Uuid) -> Result<Option<Product>>;

    /// Writes a product unconditionally, overwriting any record with the
    /// same id, and returns the stored entity.
    async fn create_product(&self, product: &Product) -> Result<Product>;
}

/// Repository contract for trader persistence.
#[async_trait]
pub trait TraderRepository: Send + Sync {
    /// Writes a trader registration and returns the stored entity.
    ///
    /// Status, tier, verification and registration timestamp are reset to
    /// their creation defaults before the write; caller-supplied values in
    /// those fields are discarded.
    async fn create_trader(&self, trader: &Trader) -> Result<Trader>;

    /// Point read by trader id.
    async fn get_trader(&self, id: Uuid) -> Result<Option<Trader>>;

    /// Lists all traders in an area.
    ///
    /// An unscoped listing is never allowed: an empty area is rejected
    /// with `InvalidArgument` before any store access.
    async fn get_traders_by_area(&self, area: &str) -> Result<Vec<Trader>>;
}
