//! `catalog-core` — building blocks shared by the catalog crates.
//!
//! Pure domain primitives: errors, identifiers and the calendar clock
//! abstraction. No storage, no IO.

pub mod clock;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
