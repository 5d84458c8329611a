//! Shared DynamoDB plumbing for the SpazaLink services.
//!
//! Both services persist their entities as flat attribute maps; this crate
//! holds the typed attribute getters/builders their codecs are built on,
//! plus the mapping from AWS SDK errors to `RepositoryError`.

pub mod attrs;
pub mod error;
