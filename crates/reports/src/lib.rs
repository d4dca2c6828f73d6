//! Read-only reporting over the entity store and the transaction log.
//!
//! The reporter consumes the store's read traits only; it never mutates
//! state and is safe to run concurrently with the inventory service.

pub mod report;

pub use report::{BusiestWarehouse, CapacityRow, PeakProductRow, Reporter};
