//! Named warehouse registry.
//!
//! Hands out one shared [`Warehouse`] per name, creating it on first request.
//! Callers normally hold their own `WarehouseRegistry` (tests build a fresh one
//! with a fixed clock); [`WarehouseRegistry::global`] is there for code that
//! wants a single process-wide registry.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use catalog_core::{Clock, SystemClock};

use crate::warehouse::Warehouse;

/// Name of the warehouse served by [`WarehouseRegistry::default_instance`].
pub const DEFAULT_WAREHOUSE_NAME: &str = "DefaultWarehouse";

static GLOBAL_REGISTRY: Lazy<WarehouseRegistry> =
    Lazy::new(|| WarehouseRegistry::new(Arc::new(SystemClock)));

#[derive(Debug)]
pub struct WarehouseRegistry {
    clock: Arc<dyn Clock>,
    // Lookup and insert happen under one lock acquisition, so concurrent first
    // requests for a name still build a single warehouse.
    instances: Mutex<HashMap<String, Arc<Warehouse>>>,
}

impl WarehouseRegistry {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            instances: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide registry backed by the system clock.
    pub fn global() -> &'static WarehouseRegistry {
        &GLOBAL_REGISTRY
    }

    /// The warehouse registered under `name`, created if this is the first request.
    pub fn get_instance(&self, name: &str) -> Arc<Warehouse> {
        let mut instances = self.instances.lock();
        if let Some(existing) = instances.get(name) {
            return Arc::clone(existing);
        }

        let warehouse = Arc::new(Warehouse::new(name, Arc::clone(&self.clock)));
        instances.insert(name.to_string(), Arc::clone(&warehouse));
        tracing::info!("created warehouse {}", name);
        warehouse
    }

    /// Same as `get_instance(DEFAULT_WAREHOUSE_NAME)`.
    pub fn default_instance(&self) -> Arc<Warehouse> {
        self.get_instance(DEFAULT_WAREHOUSE_NAME)
    }

    /// Names of all warehouses created so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.instances.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.instances.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.lock().is_empty()
    }
}

impl Default for WarehouseRegistry {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_yields_same_instance() {
        let registry = WarehouseRegistry::default();
        let a = registry.get_instance("X");
        let b = registry.get_instance("X");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.name(), "X");
    }

    #[test]
    fn different_names_yield_different_instances() {
        let registry = WarehouseRegistry::default();
        let x = registry.get_instance("X");
        let y = registry.get_instance("Y");
        assert!(!Arc::ptr_eq(&x, &y));
        assert_eq!(registry.names(), vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn default_instance_is_default_warehouse() {
        let registry = WarehouseRegistry::default();
        assert!(registry.is_empty());

        let default = registry.default_instance();
        assert!(Arc::ptr_eq(&default, &registry.get_instance("DefaultWarehouse")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn default_instance_created_by_name_first_is_reused() {
        let registry = WarehouseRegistry::default();
        let by_name = registry.get_instance("DefaultWarehouse");
        let default = registry.default_instance();
        assert!(Arc::ptr_eq(&by_name, &default));
        assert_eq!(default.name(), DEFAULT_WAREHOUSE_NAME);
    }

    #[test]
    fn registries_do_not_share_instances() {
        let first = WarehouseRegistry::default();
        let second = WarehouseRegistry::default();
        assert!(!Arc::ptr_eq(&first.get_instance("X"), &second.get_instance("X")));
    }
}
