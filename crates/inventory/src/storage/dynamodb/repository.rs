//! DynamoDB repository implementation for products.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use spazalink_core::product::{filter_by_price, AccessPlan, Product, ProductFilter};
use spazalink_core::storage::{ProductRepository, Result};
use spazalink_dynamodb::error::{
    map_get_item_error, map_put_item_error, map_query_error, map_scan_error,
};

use super::conversions::{item_to_product, product_to_item};

/// Name of the secondary index on the category attribute.
const CATEGORY_INDEX: &str = "CategoryIndex";

/// DynamoDB-backed product repository.
///
/// Point reads are strongly consistent; index-backed queries may lag a
/// write (eventual consistency). Writes are unconditional upserts.
pub struct DynamoDbProductRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbProductRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Index-backed query for an exact category match.
    async fn query_by_category(&self, category: &str) -> Result<Vec<Product>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(CATEGORY_INDEX)
            .key_condition_expression("category = :category")
            .expression_attribute_values(":category", AttributeValue::S(category.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_product).collect()
    }

    /// Full-table scan; cost is proportional to collection size.
    async fn scan_all(&self) -> Result<Vec<Product>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_product).collect()
    }
}

#[async_trait]
impl ProductRepository for DynamoDbProductRepository {
    async fn search_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let products = match filter.access_plan() {
            AccessPlan::CategoryQuery(category) => self.query_by_category(&category).await?,
            AccessPlan::FullScan => self.scan_all().await?,
        };

        Ok(filter_by_price(
            products,
            filter.min_price,
            filter.max_price,
        ))
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("productId", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_product(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_product(&self, product: &Product) -> Result<Product> {
        let item = product_to_item(product);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(product.clone())
    }
}
