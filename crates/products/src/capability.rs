//! Optional behaviors a product variant may declare.
//!
//! A variant can implement none, one or both of these. The warehouse finds
//! them through the hooks on [`Product`](crate::Product), never by downcasting.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use catalog_core::{Clock, ProductId};

/// Can be shipped; shipping cost derives from weight.
pub trait Shippable: Send + Sync + core::fmt::Debug {
    /// Id of the product behind this view.
    fn product_id(&self) -> ProductId;

    fn weight(&self) -> Decimal;

    fn calculate_shipping_cost(&self) -> Decimal;
}

/// Has a shelf life.
pub trait Perishable: Send + Sync + core::fmt::Debug {
    /// Id of the product behind this view.
    fn product_id(&self) -> ProductId;

    fn expiration_date(&self) -> NaiveDate;

    /// Expired once `today` is strictly after the expiration date; a product
    /// expiring today is still good.
    fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiration_date() < today
    }

    fn is_expired(&self, clock: &dyn Clock) -> bool {
        self.is_expired_on(clock.today())
    }
}
