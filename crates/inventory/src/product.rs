use serde::{Deserialize, Serialize};

use stockyard_core::{InventoryError, InventoryResult, ProductId, WarehouseId};

/// A quantity of one category stored in one warehouse.
///
/// Products are created by a successful import and destroyed by a successful
/// export. There is no partial-quantity update path: restocking is modeled
/// as export-then-import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category: String,
    /// Always positive.
    pub quantity: i64,
    pub warehouse_id: WarehouseId,
}

/// Validated input for an import (id not yet assigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    category: String,
    quantity: i64,
    warehouse_id: WarehouseId,
}

impl ProductDraft {
    pub fn new(
        category: impl Into<String>,
        quantity: i64,
        warehouse_id: WarehouseId,
    ) -> InventoryResult<Self> {
        let category = category.into();

        if category.trim().is_empty() {
            return Err(InventoryError::validation("product category cannot be empty"));
        }
        if quantity <= 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }

        Ok(Self {
            category,
            quantity,
            warehouse_id,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn warehouse_id(&self) -> WarehouseId {
        self.warehouse_id
    }

    /// Materialize the draft with its store-assigned id.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            category: self.category,
            quantity: self.quantity,
            warehouse_id: self.warehouse_id,
        }
    }
}
