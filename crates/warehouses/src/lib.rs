//! `fulfilment-warehouses` — the warehouse lifecycle engine.
//!
//! This crate holds the only part of the system with nontrivial business
//! rules: validation-gated creation, soft-delete archival, and atomic
//! replace-in-place of warehouses, constrained by per-location capacity
//! limits. Persistence and location lookup are consumed through ports
//! ([`WarehouseStore`], [`LocationResolver`]); any implementation can be
//! substituted without touching the use cases.

pub mod archive;
pub mod create;
pub mod location;
pub mod replace;
pub mod store;
pub mod warehouse;

pub use archive::ArchiveWarehouse;
pub use create::CreateWarehouse;
pub use location::{Location, LocationResolver};
pub use replace::ReplaceWarehouse;
pub use store::WarehouseStore;
pub use warehouse::Warehouse;

#[cfg(test)]
pub(crate) mod testing;
