//! Core domain types and repository contracts for SpazaLink.
//!
//! This crate holds the entities, search planning logic and repository
//! traits shared by the inventory and traders services. It has no storage
//! or HTTP dependencies so that the pure logic can be tested in isolation.

pub mod product;
pub mod storage;
pub mod trader;
