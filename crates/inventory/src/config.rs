use std::env;

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory storage, for local development and tests.
    Memory,
    /// AWS DynamoDB.
    DynamoDb,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend (default: memory)
    pub storage_backend: StorageBackend,
    /// DynamoDB table for products (default: "Products")
    pub products_table: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_BACKEND` - "memory" or "dynamodb" (default: "memory")
    /// - `PRODUCTS_TABLE_NAME` - DynamoDB table name (default: "Products")
    pub fn from_env() -> Self {
        let storage_backend = match env::var("STORAGE_BACKEND").as_deref() {
            Ok("dynamodb") => StorageBackend::DynamoDb,
            _ => StorageBackend::Memory,
        };

        Self {
            storage_backend,
            products_table: env::var("PRODUCTS_TABLE_NAME")
                .unwrap_or_else(|_| "Products".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        env::remove_var("STORAGE_BACKEND");
        env::remove_var("PRODUCTS_TABLE_NAME");

        let config = Config::from_env();

        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.products_table, "Products");
    }
}
