//! DynamoDB storage backend for products.

mod conversions;
mod repository;

pub use repository::DynamoDbProductRepository;
