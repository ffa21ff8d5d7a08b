//! `fulfilment-stores` — retail store records and the legacy sync side-channel.
//!
//! Stores are plain CRUD data; the only wrinkle is that creates and updates
//! must be mirrored to a legacy system after the enclosing unit of work
//! commits (see [`legacy`]).

pub mod legacy;
pub mod store;

pub use legacy::{LegacyStoreManager, OperationType, StoreChangeEvent};
pub use store::{Store, StoreRepository};
