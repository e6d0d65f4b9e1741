//! Product catalog entities.
//!
//! A [`Product`] is any type holding a [`ProductCore`]; variants opt into the
//! [`Shippable`] and [`Perishable`] capabilities. Pure domain logic, no IO.

pub mod capability;
pub mod category;
pub mod electronics;
pub mod product;

pub use capability::{Perishable, Shippable};
pub use category::Category;
pub use electronics::{ElectronicsProduct, NewElectronics};
pub use product::{Product, ProductCore};
