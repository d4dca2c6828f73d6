//! Error model for the inventory core.

use thiserror::Error;

use crate::id::{ProductId, WarehouseId};

/// Result type used across the inventory core.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Error returned to the immediate caller of a core operation.
///
/// Validation failures (`InvalidQuantity`, `CategoryNotAllowed`,
/// `CapacityExceeded`) are permanent for the given input and must not be
/// retried unchanged. `StoreUnavailable` is the only variant a caller might
/// reasonably retry. No variant leaves the entity store and the transaction
/// log inconsistent with each other.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A referenced warehouse or product does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Quantities must be strictly positive.
    #[error("quantity must be positive (got {0})")]
    InvalidQuantity(i64),

    /// The warehouse restricts categories and this one is not in the set.
    #[error("category '{category}' is not allowed in warehouse {warehouse_id}")]
    CategoryNotAllowed {
        category: String,
        warehouse_id: WarehouseId,
    },

    /// Admitting the product would push the warehouse past its capacity.
    #[error(
        "warehouse {warehouse_id} capacity exceeded: stored {stored} + requested {requested} > capacity {capacity}"
    )]
    CapacityExceeded {
        warehouse_id: WarehouseId,
        stored: i64,
        requested: i64,
        capacity: i64,
    },

    /// The durable store could not be reached or left a lock poisoned.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The caller cancelled before the atomic commit point.
    #[error("operation cancelled")]
    Cancelled,

    /// A value failed validation (e.g. malformed draft input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl InventoryError {
    pub fn warehouse_not_found(id: WarehouseId) -> Self {
        Self::NotFound(format!("warehouse {id}"))
    }

    pub fn product_not_found(id: ProductId) -> Self {
        Self::NotFound(format!("product {id}"))
    }

    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Whether a retry of the same call could ever succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}
