use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use catalog_core::{DomainError, DomainResult, ProductId};

use crate::capability::Shippable;
use crate::category::Category;
use crate::product::{Product, ProductCore};

/// Flat shipping fee for any electronics parcel.
const BASE_SHIPPING: Decimal = dec!(79);
/// Added when the parcel is heavier than [`HEAVY_THRESHOLD`].
const HEAVY_SURCHARGE: Decimal = dec!(49);
const HEAVY_THRESHOLD: Decimal = dec!(5.0);

/// Input for [`ElectronicsProduct::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElectronics {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub warranty_months: i32,
    pub weight: Option<Decimal>,
}

/// Electronics: a shippable product with a warranty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectronicsProduct {
    core: ProductCore,
    warranty_months: u32,
    weight: Decimal,
}

impl ElectronicsProduct {
    pub fn create(input: NewElectronics) -> DomainResult<Self> {
        let core = ProductCore::new(input.id, input.name, input.category, input.price)?;

        let warranty_months = u32::try_from(input.warranty_months)
            .map_err(|_| DomainError::validation("warranty months cannot be negative"))?;

        let weight = input
            .weight
            .ok_or_else(|| DomainError::validation("weight is required"))?;
        if weight < Decimal::ZERO {
            return Err(DomainError::validation("weight cannot be negative"));
        }

        Ok(Self {
            core,
            warranty_months,
            weight,
        })
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Product for ElectronicsProduct {
    fn core(&self) -> &ProductCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ProductCore {
        &mut self.core
    }

    fn product_details(&self) -> String {
        format!(
            "Electronics: {}, Warranty: {} months",
            self.core.name(),
            self.warranty_months
        )
    }

    fn clone_product(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }

    fn as_shippable(&self) -> Option<&dyn Shippable> {
        Some(self)
    }

    fn into_shippable(self: Arc<Self>) -> Option<Arc<dyn Shippable>> {
        Some(self)
    }
}

impl Shippable for ElectronicsProduct {
    fn product_id(&self) -> ProductId {
        self.core.id()
    }

    fn weight(&self) -> Decimal {
        self.weight
    }

    fn calculate_shipping_cost(&self) -> Decimal {
        if self.weight > HEAVY_THRESHOLD {
            BASE_SHIPPING + HEAVY_SURCHARGE
        } else {
            BASE_SHIPPING
        }
    }
}
