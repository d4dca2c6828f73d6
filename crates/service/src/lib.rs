//! Inventory service: the only mutation entry point of the core.
//!
//! Orchestrates the constraint engine, the entity store and the transaction
//! log into atomic import/export operations.

pub mod service;

pub use service::InventoryService;
