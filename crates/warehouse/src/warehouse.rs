use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use rust_decimal::Decimal;

use catalog_core::{Clock, DomainError, DomainResult, ProductId};
use catalog_products::{Category, Perishable, Product, Shippable};

#[derive(Debug, Default)]
struct Inventory {
    products: Vec<Arc<dyn Product>>,
    /// One entry per repriced product id, in first-change order.
    changed: Vec<Arc<dyn Product>>,
}

/// Named, in-memory product registry.
///
/// Products keep insertion order and are unique by id within this warehouse.
/// Every read returns an owned snapshot: repricing swaps in a new product
/// value, so snapshots taken earlier keep the price they saw.
///
/// Each method is atomic on its own (the collections sit behind one lock).
/// Sequences of calls are not.
#[derive(Debug)]
pub struct Warehouse {
    name: String,
    clock: Arc<dyn Clock>,
    inventory: RwLock<Inventory>,
}

impl Warehouse {
    /// Create a standalone warehouse. Shared, named instances come from
    /// [`WarehouseRegistry`](crate::WarehouseRegistry).
    pub fn new(name: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: name.into(),
            clock,
            inventory: RwLock::new(Inventory::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a new product. Use [`update_product_price`](Self::update_product_price)
    /// to modify one that is already here.
    pub fn add_product(&self, product: Box<dyn Product>) -> DomainResult<()> {
        let id = product.id();
        let mut inventory = self.inventory.write();

        if inventory.products.iter().any(|existing| existing.id() == id) {
            tracing::warn!(warehouse = %self.name, product_id = %id, "duplicate product rejected");
            return Err(DomainError::conflict(format!(
                "product {id} already exists, use update_product_price for updates"
            )));
        }

        inventory.products.push(Arc::from(product));
        tracing::debug!(warehouse = %self.name, product_id = %id, "product added");
        Ok(())
    }

    pub fn get_products(&self) -> Vec<Arc<dyn Product>> {
        self.inventory.read().products.clone()
    }

    pub fn get_product_by_id(&self, id: ProductId) -> Option<Arc<dyn Product>> {
        self.inventory
            .read()
            .products
            .iter()
            .find(|p| p.id() == id)
            .cloned()
    }

    /// Set a new price and record the product as changed.
    ///
    /// Fails with `NotFound` for an unknown id and with `Validation` for a
    /// negative price; either way nothing is modified.
    pub fn update_product_price(&self, id: ProductId, new_price: Decimal) -> DomainResult<()> {
        let mut guard = self.inventory.write();
        let inventory = &mut *guard;

        let Some(slot) = inventory.products.iter_mut().find(|p| p.id() == id) else {
            tracing::warn!(warehouse = %self.name, product_id = %id, "price update for unknown product");
            return Err(DomainError::not_found(format!("product with id {id}")));
        };

        let mut repriced = slot.clone_product();
        repriced.set_price(new_price)?;
        let repriced: Arc<dyn Product> = Arc::from(repriced);
        *slot = Arc::clone(&repriced);

        match inventory.changed.iter_mut().find(|p| p.id() == id) {
            Some(entry) => *entry = repriced,
            None => inventory.changed.push(repriced),
        }

        tracing::debug!(warehouse = %self.name, product_id = %id, price = %new_price, "price updated");
        Ok(())
    }

    /// Products repriced since the last [`clear_products`](Self::clear_products),
    /// each with its latest price.
    pub fn get_changed_products(&self) -> Vec<Arc<dyn Product>> {
        self.inventory.read().changed.clone()
    }

    /// Perishable products that are past their expiration date today,
    /// according to this warehouse's clock.
    pub fn expired_products(&self) -> Vec<Arc<dyn Perishable>> {
        self.expired_products_on(self.clock.today())
    }

    pub fn expired_products_on(&self, today: NaiveDate) -> Vec<Arc<dyn Perishable>> {
        self.inventory
            .read()
            .products
            .iter()
            .filter_map(|p| Arc::clone(p).into_perishable())
            .filter(|p| p.is_expired_on(today))
            .collect()
    }

    pub fn shippable_products(&self) -> Vec<Arc<dyn Shippable>> {
        self.inventory
            .read()
            .products
            .iter()
            .filter_map(|p| Arc::clone(p).into_shippable())
            .collect()
    }

    /// Remove every product with this id. Unknown ids are ignored.
    pub fn remove(&self, id: ProductId) {
        let mut inventory = self.inventory.write();
        let before = inventory.products.len();
        inventory.products.retain(|p| p.id() != id);

        let removed = before - inventory.products.len();
        if removed > 0 {
            tracing::debug!(warehouse = %self.name, product_id = %id, removed, "product removed");
        }
    }

    /// Drop all products and forget which ones were repriced.
    pub fn clear_products(&self) {
        let mut inventory = self.inventory.write();
        inventory.products.clear();
        inventory.changed.clear();
        tracing::debug!(warehouse = %self.name, "warehouse cleared");
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.read().products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inventory.read().products.len()
    }

    /// Products by category; each group keeps insertion order.
    pub fn get_products_grouped_by_categories(&self) -> BTreeMap<Category, Vec<Arc<dyn Product>>> {
        let inventory = self.inventory.read();
        let mut groups: BTreeMap<Category, Vec<Arc<dyn Product>>> = BTreeMap::new();
        for product in &inventory.products {
            groups
                .entry(product.category().clone())
                .or_default()
                .push(Arc::clone(product));
        }
        groups
    }
}
