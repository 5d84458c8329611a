//! Storage backend implementations for the inventory service.
//!
//! Concrete implementations of `spazalink_core::storage::ProductRepository`.
//! The backend is selected at startup from configuration: DynamoDB in
//! deployment, in-memory for tests and local development.

pub mod dynamodb;
pub mod inmemory;
