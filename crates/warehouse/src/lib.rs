//! Warehouse registry: named, in-memory product collections.
//!
//! A [`Warehouse`] holds products in insertion order, tracks which ones were
//! repriced and exposes capability-filtered and category-grouped views. A
//! [`WarehouseRegistry`] hands out one shared warehouse per name.

pub mod registry;
pub mod warehouse;

pub use registry::{DEFAULT_WAREHOUSE_NAME, WarehouseRegistry};
pub use warehouse::Warehouse;
