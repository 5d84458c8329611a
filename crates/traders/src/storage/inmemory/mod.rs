//! In-memory storage backend for traders.

mod repository;

pub use repository::InMemoryTraderRepository;
