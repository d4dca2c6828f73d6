use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use stockyard_core::{CancelToken, InventoryError, InventoryResult, ProductId, WarehouseId};
use stockyard_inventory::{
    Product, ProductDraft, validate_capacity, validate_category, validate_quantity,
};
use stockyard_store::InventoryStore;

/// Orchestrates validation, entity mutation and log append into atomic
/// import/export operations.
///
/// Imports targeting the same warehouse are serialized through a
/// per-warehouse lock so that the capacity check and the subsequent insert
/// form one atomic unit; operations on different warehouses do not block
/// each other. Exports serialize on the owning warehouse's lock, and the
/// store's atomic remove makes a double export fail `NotFound` rather than
/// run twice.
pub struct InventoryService<S: InventoryStore> {
    store: S,
    locks: Mutex<HashMap<WarehouseId, Arc<Mutex<()>>>>,
}

impl<S: InventoryStore> InventoryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Read access for collaborators (reporting layer, tests).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lazily materialize the mutex for one warehouse.
    ///
    /// Warehouses are never deleted, so entries accumulate for the lifetime
    /// of the service; one small Arc per warehouse ever touched.
    fn warehouse_lock(&self, id: WarehouseId) -> InventoryResult<Arc<Mutex<()>>> {
        let mut locks = self
            .locks
            .lock()
            .map_err(|_| InventoryError::store_unavailable("lock registry poisoned"))?;
        Ok(Arc::clone(locks.entry(id).or_default()))
    }

    /// Validate and commit a stock addition.
    ///
    /// On success the product is stored and exactly one IMPORT entry is
    /// appended, atomically. On any failure no state changes. Cancellation
    /// is honored up to the commit point only.
    pub fn import(
        &self,
        warehouse_id: WarehouseId,
        category: &str,
        quantity: i64,
        cancel: &CancelToken,
    ) -> InventoryResult<Product> {
        let warehouse = self.store.warehouse(warehouse_id)?;
        validate_quantity(quantity)?;

        let lock = self.warehouse_lock(warehouse_id)?;
        let _guard = lock
            .lock()
            .map_err(|_| InventoryError::store_unavailable("warehouse lock poisoned"))?;

        cancel.check()?;

        validate_category(&warehouse, category)?;
        let stored = self.store.sum_quantity(warehouse_id)?;
        validate_capacity(&warehouse, stored, quantity)?;

        cancel.check()?;

        let draft = ProductDraft::new(category, quantity, warehouse_id)?;
        let (product, entry) = self.store.commit_import(draft)?;

        tracing::info!(
            warehouse_id = %warehouse_id,
            product_id = %product.id,
            entry_id = %entry.id,
            category,
            quantity,
            "import committed"
        );

        Ok(product)
    }

    /// Remove a product and record the EXPORT entry, atomically.
    ///
    /// Removal never increases load, so no validation runs: an export
    /// succeeds whenever the product exists. The returned product carries
    /// its pre-removal data.
    pub fn export(&self, product_id: ProductId, cancel: &CancelToken) -> InventoryResult<Product> {
        let product = self.store.product(product_id)?;

        let lock = self.warehouse_lock(product.warehouse_id)?;
        let _guard = lock
            .lock()
            .map_err(|_| InventoryError::store_unavailable("warehouse lock poisoned"))?;

        cancel.check()?;

        // The product may have been exported while we waited on the lock;
        // the store's atomic remove reports that as NotFound.
        let (removed, entry) = self.store.commit_export(product_id)?;

        tracing::info!(
            warehouse_id = %removed.warehouse_id,
            product_id = %removed.id,
            entry_id = %entry.id,
            category = %removed.category,
            quantity = removed.quantity,
            "export committed"
        );

        Ok(removed)
    }
}
