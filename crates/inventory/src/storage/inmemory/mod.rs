//! In-memory storage backend for products.

mod repository;

pub use repository::InMemoryProductRepository;
