//! Concurrent mutation guarantees: per-warehouse serialization closes the
//! check-then-act capacity race, exports are single-winner, and the log
//! stays consistent with the entity state throughout.

use std::sync::{Arc, Barrier};
use std::thread;

use stockyard_core::{CancelToken, InventoryError};
use stockyard_inventory::{AllowedCategories, EntryKind, LogFilter, Warehouse, WarehouseDraft};
use stockyard_service::InventoryService;
use stockyard_store::{EntityStore, InventoryStore, MemoryStore, TransactionLog};

fn service_with_warehouse(capacity: i64) -> (Arc<InventoryService<MemoryStore>>, Warehouse) {
    stockyard_observability::init();
    let store = MemoryStore::new();
    let warehouse = store
        .insert_warehouse(
            WarehouseDraft::new("Race Depot", "Rotterdam", AllowedCategories::Unrestricted, capacity)
                .unwrap(),
        )
        .unwrap();
    (Arc::new(InventoryService::new(store)), warehouse)
}

#[test]
fn concurrent_imports_cannot_jointly_exceed_capacity() {
    let (service, warehouse) = service_with_warehouse(100);
    let barrier = Arc::new(Barrier::new(2));

    let handles: Vec<_> = ["A", "B"]
        .into_iter()
        .map(|category| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            let warehouse_id = warehouse.id;
            thread::spawn(move || {
                barrier.wait();
                service.import(warehouse_id, category, 80, &CancelToken::new())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one of the two imports must win");

    let failure = results
        .iter()
        .find_map(|r| r.as_ref().err())
        .expect("one import must fail");
    assert!(matches!(failure, InventoryError::CapacityExceeded { .. }));

    assert_eq!(service.store().sum_quantity(warehouse.id).unwrap(), 80);
    assert_eq!(service.store().entries(&LogFilter::all()).unwrap().len(), 1);
}

#[test]
fn exactly_the_fitting_subset_of_contending_imports_succeeds() {
    let (service, warehouse) = service_with_warehouse(100);
    let threads = 32;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            let warehouse_id = warehouse.id;
            thread::spawn(move || {
                barrier.wait();
                service
                    .import(warehouse_id, "Meat", 10, &CancelToken::new())
                    .is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count() as i64;

    // 32 attempts of 10 against capacity 100: exactly 10 fit.
    assert_eq!(successes, 10);
    assert_eq!(service.store().sum_quantity(warehouse.id).unwrap(), 100);

    let entries = service.store().entries(&LogFilter::all()).unwrap();
    assert_eq!(entries.len(), 10);
    assert!(entries.iter().all(|e| e.kind == EntryKind::Import));
    for pair in entries.windows(2) {
        assert!(pair[1].id > pair[0].id);
    }
}

#[test]
fn concurrent_exports_of_one_product_have_a_single_winner() {
    let (service, warehouse) = service_with_warehouse(100);
    let product = service
        .import(warehouse.id, "Meat", 10, &CancelToken::new())
        .unwrap();

    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            let product_id = product.id;
            thread::spawn(move || {
                barrier.wait();
                service.export(product_id, &CancelToken::new()).is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);

    let exports = service
        .store()
        .entries(&LogFilter::all().with_kind(EntryKind::Export))
        .unwrap();
    assert_eq!(exports.len(), 1);
    assert_eq!(service.store().sum_quantity(warehouse.id).unwrap(), 0);
}

#[test]
fn operations_on_different_warehouses_proceed_independently() {
    let (service, first) = service_with_warehouse(1_000);
    let second = service
        .store()
        .insert_warehouse(
            WarehouseDraft::new("Side Depot", "Antwerp", AllowedCategories::Unrestricted, 1_000)
                .unwrap(),
        )
        .unwrap();

    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let service = Arc::clone(&service);
            let barrier = Arc::clone(&barrier);
            let warehouse_id = if i % 2 == 0 { first.id } else { second.id };
            thread::spawn(move || {
                barrier.wait();
                service.import(warehouse_id, "Meat", 5, &CancelToken::new())
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert_eq!(service.store().sum_quantity(first.id).unwrap(), 40);
    assert_eq!(service.store().sum_quantity(second.id).unwrap(), 40);
    assert_eq!(service.store().entries(&LogFilter::all()).unwrap().len(), 16);
}
