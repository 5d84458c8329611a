use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product in the inventory catalogue.
///
/// Prices are fixed-point decimals (ZAR); stock may go negative when a
/// product is oversold, no invariant is enforced on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Primary category classification (e.g. "Groceries", "Beverages").
    /// This is the indexed search dimension.
    pub category: String,
    pub sub_category: String,
    /// Base price per unit in Rand.
    pub base_price: Decimal,
    /// Unit of measurement (e.g. "each", "kg", "litre").
    pub unit: String,
    pub units_per_case: u32,
    pub supplier_id: Uuid,
    /// Denormalized supplier name for quick display.
    pub supplier_name: String,
    pub stock_level: i32,
    pub minimum_order_quantity: u32,
    pub active: bool,
    pub image_urls: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl Product {
    /// Creates a new product with a generated id and the write timestamp
    /// set to now. Remaining fields start at their defaults.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: Decimal,
        supplier_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            sub_category: String::new(),
            base_price,
            unit: String::new(),
            units_per_case: 1,
            supplier_id,
            supplier_name: String::new(),
            stock_level: 0,
            minimum_order_quantity: 1,
            active: true,
            image_urls: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// Sets a specific ID for this product (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the stock level.
    pub fn with_stock_level(mut self, stock_level: i32) -> Self {
        self.stock_level = stock_level;
        self
    }

    /// Sets the image URLs.
    pub fn with_image_urls(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }
}
