use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use stockyard_core::{InventoryError, InventoryResult, WarehouseId};

/// Category restriction for a warehouse.
///
/// "No restriction" is an explicit sentinel, not the absence of a set: an
/// unrestricted warehouse admits every category, and `Only` with an empty
/// set is normalized to `Unrestricted` at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowedCategories {
    Unrestricted,
    Only(BTreeSet<String>),
}

impl AllowedCategories {
    /// Build a restriction from category labels, normalizing the empty set.
    pub fn only<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Self::Unrestricted
        } else {
            Self::Only(set)
        }
    }

    /// Exact, case-sensitive membership test.
    ///
    /// Substring or partial matching is deliberately not supported.
    pub fn allows(&self, category: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Only(set) => set.contains(category),
        }
    }
}

impl Default for AllowedCategories {
    fn default() -> Self {
        Self::Unrestricted
    }
}

/// A storage site with finite capacity.
///
/// Warehouses are created once through the administrative path and are
/// immutable afterwards; the core models no capacity or category edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
    pub location: String,
    pub allowed: AllowedCategories,
    /// Total quantity units storable. Always positive.
    pub capacity: i64,
}

/// Validated input for creating a warehouse (id not yet assigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseDraft {
    name: String,
    location: String,
    allowed: AllowedCategories,
    capacity: i64,
}

impl WarehouseDraft {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        allowed: AllowedCategories,
        capacity: i64,
    ) -> InventoryResult<Self> {
        let name = name.into();
        let location = location.into();

        if name.trim().is_empty() {
            return Err(InventoryError::validation("warehouse name cannot be empty"));
        }
        if location.trim().is_empty() {
            return Err(InventoryError::validation(
                "warehouse location cannot be empty",
            ));
        }
        if capacity <= 0 {
            return Err(InventoryError::validation(format!(
                "warehouse capacity must be positive (got {capacity})"
            )));
        }

        Ok(Self {
            name,
            location,
            allowed,
            capacity,
        })
    }

    /// Materialize the draft with its store-assigned id.
    pub fn into_warehouse(self, id: WarehouseId) -> Warehouse {
        Warehouse {
            id,
            name: self.name,
            location: self.location,
            allowed: self.allowed,
            capacity: self.capacity,
        }
    }
}
