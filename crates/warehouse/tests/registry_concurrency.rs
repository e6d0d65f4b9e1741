use std::sync::{Arc, Barrier};
use std::thread;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use catalog_core::{FixedClock, ProductId};
use catalog_products::{Category, ElectronicsProduct, NewElectronics};
use catalog_warehouse::{DEFAULT_WAREHOUSE_NAME, Warehouse, WarehouseRegistry};

fn registry() -> WarehouseRegistry {
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    WarehouseRegistry::new(Arc::new(FixedClock::new(today)))
}

#[test]
fn concurrent_first_access_creates_one_instance() {
    const THREADS: usize = 16;
    let registry = registry();
    let barrier = Barrier::new(THREADS);

    let instances: Vec<Arc<Warehouse>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    registry.get_instance("Contended")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &instances[0];
    assert!(instances.iter().all(|w| Arc::ptr_eq(w, first)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn products_added_from_other_threads_are_visible() {
    let registry = registry();
    let electronics = Category::new("Electronics").unwrap();

    thread::scope(|scope| {
        for n in 0..8 {
            let registry = &registry;
            let electronics = electronics.clone();
            scope.spawn(move || {
                let product = ElectronicsProduct::create(NewElectronics {
                    id: ProductId::new(),
                    name: format!("Phone {n}"),
                    category: electronics,
                    price: dec!(4999),
                    warranty_months: 12,
                    weight: Some(dec!(0.2)),
                })
                .unwrap();
                registry.get_instance("Shared").add_product(Box::new(product)).unwrap();
            });
        }
    });

    let shared = registry.get_instance("Shared");
    assert_eq!(shared.len(), 8);
    assert_eq!(shared.shippable_products().len(), 8);
    assert_eq!(shared.get_products_grouped_by_categories()[&electronics].len(), 8);
}

#[test]
fn global_registry_hands_out_stable_instances() {
    let a = WarehouseRegistry::global().get_instance("GlobalTestWarehouse");
    let b = WarehouseRegistry::global().get_instance("GlobalTestWarehouse");
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn global_default_instance_is_the_default_warehouse() {
    let registry = WarehouseRegistry::global();
    let default = registry.default_instance();

    assert_eq!(default.name(), "DefaultWarehouse");
    assert_eq!(default.name(), DEFAULT_WAREHOUSE_NAME);
    assert!(Arc::ptr_eq(&default, &registry.get_instance("DefaultWarehouse")));
}
