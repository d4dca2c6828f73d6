use std::collections::BTreeMap;

use serde::Serialize;

use stockyard_core::{InventoryResult, WarehouseId};
use stockyard_inventory::LogFilter;
use stockyard_store::{EntityStore, TransactionLog};

/// Capacity utilization of one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapacityRow {
    pub warehouse_id: WarehouseId,
    pub name: String,
    pub product_count: usize,
    pub total_capacity: i64,
    pub free_capacity: i64,
}

/// The warehouse with the most transaction-log entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusiestWarehouse {
    pub warehouse_id: WarehouseId,
    pub transaction_count: usize,
}

/// The max-quantity product currently stored in one warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakProductRow {
    pub warehouse_name: String,
    pub category: String,
    pub quantity: i64,
}

/// Aggregate read queries over current and historical state.
pub struct Reporter<S> {
    store: S,
}

impl<S> Reporter<S>
where
    S: EntityStore + TransactionLog,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Utilization per warehouse, in ascending warehouse-id order.
    pub fn capacity_report(&self) -> InventoryResult<Vec<CapacityRow>> {
        let mut rows = Vec::new();
        for warehouse in self.store.list_warehouses()? {
            let product_count = self.store.list_products(warehouse.id)?.len();
            let stored = self.store.sum_quantity(warehouse.id)?;
            rows.push(CapacityRow {
                warehouse_id: warehouse.id,
                name: warehouse.name,
                product_count,
                total_capacity: warehouse.capacity,
                free_capacity: warehouse.capacity - stored,
            });
        }
        Ok(rows)
    }

    /// The warehouse with the most IMPORT/EXPORT entries.
    ///
    /// Ties break to the lowest warehouse id; `None` when the log is empty.
    pub fn busiest_warehouse(&self) -> InventoryResult<Option<BusiestWarehouse>> {
        let mut counts: BTreeMap<WarehouseId, usize> = BTreeMap::new();
        for entry in self.store.entries(&LogFilter::all())? {
            *counts.entry(entry.warehouse_id).or_default() += 1;
        }

        // Ascending-id iteration + strict comparison keeps the lowest id on ties.
        let mut best: Option<BusiestWarehouse> = None;
        for (warehouse_id, transaction_count) in counts {
            let replace = match &best {
                None => true,
                Some(current) => transaction_count > current.transaction_count,
            };
            if replace {
                best = Some(BusiestWarehouse {
                    warehouse_id,
                    transaction_count,
                });
            }
        }
        Ok(best)
    }

    /// The max-quantity product per warehouse, in ascending warehouse-id
    /// order.
    ///
    /// Ties break to the lowest product id (the earliest import); warehouses
    /// holding no products are omitted.
    pub fn peak_product_per_warehouse(&self) -> InventoryResult<Vec<PeakProductRow>> {
        let mut rows = Vec::new();
        for warehouse in self.store.list_warehouses()? {
            let mut peak: Option<PeakProductRow> = None;
            // Insertion order; strict comparison keeps the earliest on ties.
            for product in self.store.list_products(warehouse.id)? {
                let replace = match &peak {
                    None => true,
                    Some(current) => product.quantity > current.quantity,
                };
                if replace {
                    peak = Some(PeakProductRow {
                        warehouse_name: warehouse.name.clone(),
                        category: product.category,
                        quantity: product.quantity,
                    });
                }
            }
            if let Some(row) = peak {
                rows.push(row);
            }
        }
        Ok(rows)
    }
}
