//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. The canonical
/// example in this system is a location: `Location { identification,
/// max_number_of_warehouses, max_capacity }` is reference data — two copies
/// with the same values are interchangeable, and "modifying" one means
/// producing a new value.
///
/// The trait requires:
/// - **Clone**: value objects should be cheap to copy (they're values, not references)
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
