//! `stockyard-core`: foundation building blocks for the inventory core.
//!
//! This crate contains **pure** primitives (no infrastructure concerns):
//! the error taxonomy, strongly-typed sequence identifiers, and the
//! cancellation token handed to mutation operations.

pub mod cancel;
pub mod error;
pub mod id;

pub use cancel::CancelToken;
pub use error::{InventoryError, InventoryResult};
pub use id::{EntryId, ProductId, WarehouseId};
