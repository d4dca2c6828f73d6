use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use stockyard_core::{EntryId, InventoryError, InventoryResult, ProductId, WarehouseId};
use stockyard_inventory::{
    EntryKind, LogEntry, LogFilter, Product, ProductDraft, Warehouse, WarehouseDraft,
};

use crate::contract::{EntityStore, InventoryStore, TransactionLog};

/// All store state lives behind one lock so that a commit (entity mutation
/// plus log append) is observed by readers as a single atomic unit.
#[derive(Debug)]
struct StoreState {
    warehouses: BTreeMap<WarehouseId, Warehouse>,
    products: BTreeMap<ProductId, Product>,
    entries: Vec<LogEntry>,

    // Per-entity-type sequence counters; ids start at 1, never reused.
    next_warehouse: u64,
    next_product: u64,
    next_entry: u64,

    last_recorded_at: DateTime<Utc>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            warehouses: BTreeMap::new(),
            products: BTreeMap::new(),
            entries: Vec::new(),
            next_warehouse: 0,
            next_product: 0,
            next_entry: 0,
            last_recorded_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl StoreState {
    /// Commit clock: wall time clamped to never move backwards.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let ts = Utc::now().max(self.last_recorded_at);
        self.last_recorded_at = ts;
        ts
    }

    fn insert_product(&mut self, draft: ProductDraft) -> Product {
        self.next_product += 1;
        let product = draft.into_product(ProductId::new(self.next_product));
        self.products.insert(product.id, product.clone());
        product
    }

    fn remove_product(&mut self, id: ProductId) -> InventoryResult<Product> {
        self.products
            .remove(&id)
            .ok_or_else(|| InventoryError::product_not_found(id))
    }

    fn append_entry(
        &mut self,
        kind: EntryKind,
        category: String,
        warehouse_id: WarehouseId,
        quantity_changed: i64,
    ) -> LogEntry {
        self.next_entry += 1;
        let entry = LogEntry {
            id: EntryId::new(self.next_entry),
            kind,
            category,
            warehouse_id,
            quantity_changed,
            recorded_at: self.next_timestamp(),
        };
        self.entries.push(entry.clone());
        entry
    }
}

/// In-memory implementation of the store contract.
///
/// Backs tests and single-process deployments. The only failure mode is a
/// poisoned lock, surfaced as `StoreUnavailable` (the same class a remote
/// durable store would report on a timed-out call).
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> InventoryResult<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.inner
            .read()
            .map_err(|_| InventoryError::store_unavailable("state lock poisoned"))
    }

    fn write(&self) -> InventoryResult<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.inner
            .write()
            .map_err(|_| InventoryError::store_unavailable("state lock poisoned"))
    }
}

impl EntityStore for MemoryStore {
    fn warehouse(&self, id: WarehouseId) -> InventoryResult<Warehouse> {
        let state = self.read()?;
        state
            .warehouses
            .get(&id)
            .cloned()
            .ok_or_else(|| InventoryError::warehouse_not_found(id))
    }

    fn list_warehouses(&self) -> InventoryResult<Vec<Warehouse>> {
        let state = self.read()?;
        Ok(state.warehouses.values().cloned().collect())
    }

    fn product(&self, id: ProductId) -> InventoryResult<Product> {
        let state = self.read()?;
        state
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| InventoryError::product_not_found(id))
    }

    fn list_products(&self, warehouse_id: WarehouseId) -> InventoryResult<Vec<Product>> {
        let state = self.read()?;
        Ok(state
            .products
            .values()
            .filter(|p| p.warehouse_id == warehouse_id)
            .cloned()
            .collect())
    }

    fn sum_quantity(&self, warehouse_id: WarehouseId) -> InventoryResult<i64> {
        let state = self.read()?;
        Ok(state
            .products
            .values()
            .filter(|p| p.warehouse_id == warehouse_id)
            .map(|p| p.quantity)
            .sum())
    }
}

impl TransactionLog for MemoryStore {
    fn entries(&self, filter: &LogFilter) -> InventoryResult<Vec<LogEntry>> {
        let state = self.read()?;
        Ok(state
            .entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }
}

impl InventoryStore for MemoryStore {
    fn insert_warehouse(&self, draft: WarehouseDraft) -> InventoryResult<Warehouse> {
        let mut state = self.write()?;
        state.next_warehouse += 1;
        let warehouse = draft.into_warehouse(WarehouseId::new(state.next_warehouse));
        state.warehouses.insert(warehouse.id, warehouse.clone());
        Ok(warehouse)
    }

    fn commit_import(&self, draft: ProductDraft) -> InventoryResult<(Product, LogEntry)> {
        let mut state = self.write()?;
        let product = state.insert_product(draft);
        let entry = state.append_entry(
            EntryKind::Import,
            product.category.clone(),
            product.warehouse_id,
            product.quantity,
        );
        Ok((product, entry))
    }

    fn commit_export(&self, id: ProductId) -> InventoryResult<(Product, LogEntry)> {
        let mut state = self.write()?;
        let product = state.remove_product(id)?;
        let entry = state.append_entry(
            EntryKind::Export,
            product.category.clone(),
            product.warehouse_id,
            product.quantity,
        );
        Ok((product, entry))
    }
}
