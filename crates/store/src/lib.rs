//! Durable-store contract and the in-memory reference implementation.
//!
//! The inventory core is storage-engine-agnostic: anything that implements
//! the traits in [`contract`] while preserving the atomic-commit guarantees
//! can back it. [`MemoryStore`] is the bundled implementation used by tests
//! and single-process deployments.

pub mod contract;
pub mod memory;

pub use contract::{EntityStore, InventoryStore, TransactionLog};
pub use memory::MemoryStore;
