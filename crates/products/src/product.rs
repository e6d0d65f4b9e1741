use std::sync::Arc;

use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult, ProductId};

use crate::capability::{Perishable, Shippable};
use crate::category::Category;

/// State every product carries, whatever its variant.
///
/// `id` is fixed at construction; `price` only changes through [`ProductCore::set_price`],
/// which keeps it non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCore {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
}

impl ProductCore {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        ensure_price(price)?;

        Ok(Self {
            id,
            name,
            category,
            price,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_price(&mut self, price: Decimal) -> DomainResult<()> {
        ensure_price(price)?;
        self.price = price;
        Ok(())
    }
}

fn ensure_price(price: Decimal) -> DomainResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::validation("price cannot be negative"));
    }
    Ok(())
}

/// A catalog entry.
///
/// Variants hold a [`ProductCore`] and add their own attributes. Optional
/// capabilities are declared by overriding the `as_*` / `into_*` hooks; the
/// defaults report that the capability is absent.
pub trait Product: Send + Sync + core::fmt::Debug {
    fn core(&self) -> &ProductCore;

    fn core_mut(&mut self) -> &mut ProductCore;

    /// Human-readable summary; the format belongs to the variant.
    fn product_details(&self) -> String;

    fn clone_product(&self) -> Box<dyn Product>;

    fn as_shippable(&self) -> Option<&dyn Shippable> {
        None
    }

    fn as_perishable(&self) -> Option<&dyn Perishable> {
        None
    }

    fn into_shippable(self: Arc<Self>) -> Option<Arc<dyn Shippable>> {
        None
    }

    fn into_perishable(self: Arc<Self>) -> Option<Arc<dyn Perishable>> {
        None
    }

    fn id(&self) -> ProductId {
        self.core().id()
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn category(&self) -> &Category {
        self.core().category()
    }

    fn price(&self) -> Decimal {
        self.core().price()
    }

    fn set_price(&mut self, price: Decimal) -> DomainResult<()> {
        self.core_mut().set_price(price)
    }
}

impl Clone for Box<dyn Product> {
    fn clone(&self) -> Self {
        self.clone_product()
    }
}

impl core::fmt::Display for dyn Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.product_details())
    }
}
