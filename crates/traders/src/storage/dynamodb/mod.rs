//! DynamoDB storage backend for traders.

mod conversions;
mod repository;

pub use repository::DynamoDbTraderRepository;
