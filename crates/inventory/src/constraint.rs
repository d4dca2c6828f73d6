//! Constraint engine: pure validation run before any stock-increasing
//! mutation is committed.
//!
//! These functions never mutate anything and never perform IO. The caller
//! (the inventory service) is responsible for running them under the
//! per-warehouse lock so that check and insert form one atomic unit.

use stockyard_core::{InventoryError, InventoryResult};

use crate::warehouse::Warehouse;

/// Reject non-positive quantities.
pub fn validate_quantity(quantity: i64) -> InventoryResult<()> {
    if quantity <= 0 {
        return Err(InventoryError::InvalidQuantity(quantity));
    }
    Ok(())
}

/// Reject categories outside the warehouse's allowed set.
///
/// Matching is exact and case-sensitive; an unrestricted warehouse admits
/// every category.
pub fn validate_category(warehouse: &Warehouse, category: &str) -> InventoryResult<()> {
    if warehouse.allowed.allows(category) {
        return Ok(());
    }
    Err(InventoryError::CategoryNotAllowed {
        category: category.to_string(),
        warehouse_id: warehouse.id,
    })
}

/// Reject additions that would push the warehouse past its capacity.
///
/// `stored` is the current sum of product quantities in the warehouse.
/// Filling exactly to capacity is allowed. A sum too large for `i64` can
/// never fit a valid capacity, so overflow rejects rather than wraps.
pub fn validate_capacity(
    warehouse: &Warehouse,
    stored: i64,
    additional: i64,
) -> InventoryResult<()> {
    match stored.checked_add(additional) {
        Some(total) if total <= warehouse.capacity => Ok(()),
        _ => Err(InventoryError::CapacityExceeded {
            warehouse_id: warehouse.id,
            stored,
            requested: additional,
            capacity: warehouse.capacity,
        }),
    }
}
