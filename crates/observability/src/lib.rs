//! Logging setup shared by anything embedding the catalog.
//!
//! The catalog crates only emit `tracing` events; installing a subscriber is
//! left to the host process through [`init`].

/// Tracing subscriber configuration.
pub mod tracing;

pub use self::tracing::{init, init_with_filter};
