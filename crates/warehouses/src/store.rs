use crate::warehouse::Warehouse;

/// Port: persistence abstraction over warehouse records.
///
/// All queries are scoped to active (non-archived) records. The store
/// enforces no business rules; invariants live in the use cases.
///
/// `update` and `remove` are no-ops (not errors) when the targeted active
/// record no longer exists. This models benign races where the target was
/// already mutated; callers that need strict feedback must re-check their
/// preconditions before calling.
pub trait WarehouseStore: Send + Sync {
    /// All active warehouses.
    fn get_all_active(&self) -> Vec<Warehouse>;

    /// Persist a new record as given (timestamps included).
    fn create(&self, warehouse: &Warehouse);

    /// Overwrite the active record carrying this business unit code.
    fn update(&self, warehouse: &Warehouse);

    /// Physically delete the active record carrying this business unit code.
    fn remove(&self, warehouse: &Warehouse);

    /// The active record with this business unit code, if any.
    fn find_by_business_unit_code(&self, code: &str) -> Option<Warehouse>;

    /// Active warehouses assigned to the given location.
    fn find_active_by_location(&self, location: &str) -> Vec<Warehouse>;
}

impl<T: WarehouseStore + ?Sized> WarehouseStore for &T {
    fn get_all_active(&self) -> Vec<Warehouse> {
        (**self).get_all_active()
    }

    fn create(&self, warehouse: &Warehouse) {
        (**self).create(warehouse)
    }

    fn update(&self, warehouse: &Warehouse) {
        (**self).update(warehouse)
    }

    fn remove(&self, warehouse: &Warehouse) {
        (**self).remove(warehouse)
    }

    fn find_by_business_unit_code(&self, code: &str) -> Option<Warehouse> {
        (**self).find_by_business_unit_code(code)
    }

    fn find_active_by_location(&self, location: &str) -> Vec<Warehouse> {
        (**self).find_active_by_location(location)
    }
}

impl<T: WarehouseStore + ?Sized> WarehouseStore for std::sync::Arc<T> {
    fn get_all_active(&self) -> Vec<Warehouse> {
        (**self).get_all_active()
    }

    fn create(&self, warehouse: &Warehouse) {
        (**self).create(warehouse)
    }

    fn update(&self, warehouse: &Warehouse) {
        (**self).update(warehouse)
    }

    fn remove(&self, warehouse: &Warehouse) {
        (**self).remove(warehouse)
    }

    fn find_by_business_unit_code(&self, code: &str) -> Option<Warehouse> {
        (**self).find_by_business_unit_code(code)
    }

    fn find_active_by_location(&self, location: &str) -> Vec<Warehouse> {
        (**self).find_active_by_location(location)
    }
}
