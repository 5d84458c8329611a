//! DynamoDB repository implementation for traders.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use spazalink_core::storage::{RepositoryError, Result, TraderRepository};
use spazalink_core::trader::Trader;
use spazalink_dynamodb::error::{map_get_item_error, map_put_item_error, map_scan_error};

use super::conversions::{item_to_trader, trader_to_item};

/// DynamoDB-backed trader repository.
///
/// Point reads are strongly consistent. Area listings scan the whole
/// table with a server-side filter; no secondary index backs the area
/// attribute, so their cost grows with the table.
pub struct DynamoDbTraderRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbTraderRepository {
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
}

#[async_trait]
impl TraderRepository for DynamoDbTraderRepository {
    async fn create_trader(&self, trader: &Trader) -> Result<Trader> {
        let trader = trader.clone().registration_defaults();
        let item = trader_to_item(&trader);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(trader)
    }

    async fn get_trader(&self, id: Uuid) -> Result<Option<Trader>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("ID", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_trader(&item)?)),
            None => Ok(None),
        }
    }

    async fn get_traders_by_area(&self, area: &str) -> Result<Vec<Trader>> {
        if area.trim().is_empty() {
            return Err(RepositoryError::InvalidArgument(
                "area must not be empty".to_string(),
            ));
        }

        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("Area = :area")
            .expression_attribute_values(":area", AttributeValue::S(area.to_string()))
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_trader).collect()
    }
}
