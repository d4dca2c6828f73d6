//! Inventory domain module.
//!
//! This crate contains the records the core tracks (warehouses, products,
//! transaction-log entries) and the constraint engine: pure, deterministic
//! validation logic (no IO, no storage, no mutation).

pub mod constraint;
pub mod log;
pub mod product;
pub mod warehouse;

pub use constraint::{validate_capacity, validate_category, validate_quantity};
pub use log::{EntryKind, LogEntry, LogFilter};
pub use product::{Product, ProductDraft};
pub use warehouse::{AllowedCategories, Warehouse, WarehouseDraft};
