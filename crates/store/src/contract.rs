//! Store contract consumed by the inventory service and the reporting layer.

use std::sync::Arc;

use stockyard_core::{InventoryResult, ProductId, WarehouseId};
use stockyard_inventory::{LogEntry, LogFilter, Product, ProductDraft, Warehouse, WarehouseDraft};

/// Read access to current warehouse and product records.
///
/// Readers observe a consistent snapshot taken at call time; they never see
/// a half-applied commit. Absent records surface as
/// [`stockyard_core::InventoryError::NotFound`].
pub trait EntityStore: Send + Sync {
    fn warehouse(&self, id: WarehouseId) -> InventoryResult<Warehouse>;

    /// All warehouses in ascending id order.
    fn list_warehouses(&self) -> InventoryResult<Vec<Warehouse>>;

    fn product(&self, id: ProductId) -> InventoryResult<Product>;

    /// Products of one warehouse in insertion order (ids are assigned in
    /// insertion order, so this is ascending id order).
    fn list_products(&self, warehouse_id: WarehouseId) -> InventoryResult<Vec<Product>>;

    /// Sum of product quantities in the warehouse; 0 if it holds none.
    fn sum_quantity(&self, warehouse_id: WarehouseId) -> InventoryResult<i64>;
}

/// Read access to the append-only transaction log.
///
/// There is deliberately no update or delete operation anywhere on this
/// surface: entries are immutable facts.
pub trait TransactionLog: Send + Sync {
    /// Matching entries in ascending entry-id order (a call-time snapshot).
    fn entries(&self, filter: &LogFilter) -> InventoryResult<Vec<LogEntry>>;
}

/// Write contract for the durable store.
///
/// The commit methods are the transactional boundary: entity mutation and
/// log append happen as one atomic unit, and no reader ever observes one
/// without the other. They perform **no validation**; the constraint
/// engine has already passed by the time they are called, under the
/// service's per-warehouse lock.
pub trait InventoryStore: EntityStore + TransactionLog {
    /// Administrative path: assign an id and store a new warehouse.
    fn insert_warehouse(&self, draft: WarehouseDraft) -> InventoryResult<Warehouse>;

    /// Insert the product and append its IMPORT entry atomically.
    fn commit_import(&self, draft: ProductDraft) -> InventoryResult<(Product, LogEntry)>;

    /// Remove the product (`NotFound` if absent) and append its EXPORT
    /// entry atomically. The returned product carries its pre-removal data.
    fn commit_export(&self, id: ProductId) -> InventoryResult<(Product, LogEntry)>;
}

impl<S> EntityStore for Arc<S>
where
    S: EntityStore + ?Sized,
{
    fn warehouse(&self, id: WarehouseId) -> InventoryResult<Warehouse> {
        (**self).warehouse(id)
    }

    fn list_warehouses(&self) -> InventoryResult<Vec<Warehouse>> {
        (**self).list_warehouses()
    }

    fn product(&self, id: ProductId) -> InventoryResult<Product> {
        (**self).product(id)
    }

    fn list_products(&self, warehouse_id: WarehouseId) -> InventoryResult<Vec<Product>> {
        (**self).list_products(warehouse_id)
    }

    fn sum_quantity(&self, warehouse_id: WarehouseId) -> InventoryResult<i64> {
        (**self).sum_quantity(warehouse_id)
    }
}

impl<S> TransactionLog for Arc<S>
where
    S: TransactionLog + ?Sized,
{
    fn entries(&self, filter: &LogFilter) -> InventoryResult<Vec<LogEntry>> {
        (**self).entries(filter)
    }
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn insert_warehouse(&self, draft: WarehouseDraft) -> InventoryResult<Warehouse> {
        (**self).insert_warehouse(draft)
    }

    fn commit_import(&self, draft: ProductDraft) -> InventoryResult<(Product, LogEntry)> {
        (**self).commit_import(draft)
    }

    fn commit_export(&self, id: ProductId) -> InventoryResult<(Product, LogEntry)> {
        (**self).commit_export(id)
    }
}
