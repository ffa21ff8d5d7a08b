//! `fulfilment-infra` — reference adapters for the domain ports.
//!
//! Everything here is in-memory: the warehouse store and the store/product
//! repositories guard their rows with an `RwLock`, and the location
//! directory is a fixed table. A database-backed implementation would slot
//! in behind the same ports without touching the use cases.

pub mod legacy;
pub mod location_directory;
pub mod product_repository;
pub mod store_repository;
pub mod warehouse_store;

pub use legacy::{LoggingLegacyStoreManager, StoreChangeOutbox};
pub use location_directory::StaticLocationDirectory;
pub use product_repository::InMemoryProductRepository;
pub use store_repository::InMemoryStoreRepository;
pub use warehouse_store::{InMemoryWarehouseStore, WarehouseRecord};
