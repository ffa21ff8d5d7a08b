use serde::{Deserialize, Serialize};

use fulfilment_core::ValueObject;

/// A capacity-constrained site. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub identification: String,
    /// Ceiling on concurrently active warehouses at this location.
    pub max_number_of_warehouses: u32,
    /// Ceiling on the sum of `capacity` across active warehouses here.
    pub max_capacity: u32,
}

impl Location {
    pub fn new(identification: impl Into<String>, max_number_of_warehouses: u32, max_capacity: u32) -> Self {
        Self {
            identification: identification.into(),
            max_number_of_warehouses,
            max_capacity,
        }
    }
}

impl ValueObject for Location {}

/// Port: resolves a location identifier to its capacity limits.
///
/// A pure lookup — unknown identifiers yield `None`, never an error, and
/// resolving has no side effects.
pub trait LocationResolver: Send + Sync {
    fn resolve_by_identifier(&self, identifier: &str) -> Option<Location>;
}

impl<T: LocationResolver + ?Sized> LocationResolver for &T {
    fn resolve_by_identifier(&self, identifier: &str) -> Option<Location> {
        (**self).resolve_by_identifier(identifier)
    }
}

impl<T: LocationResolver + ?Sized> LocationResolver for std::sync::Arc<T> {
    fn resolve_by_identifier(&self, identifier: &str) -> Option<Location> {
        (**self).resolve_by_identifier(identifier)
    }
}
