//! Hand-rolled test doubles for the port traits.
//!
//! The fakes are stubs, not reimplementations: tests preload exactly what
//! each query should return, and the mutating side records what it was
//! handed so assertions can check for absent side effects.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::location::{Location, LocationResolver};
use crate::store::WarehouseStore;
use crate::warehouse::Warehouse;

#[derive(Default)]
pub(crate) struct FakeWarehouseStore {
    by_code: Mutex<HashMap<String, Warehouse>>,
    by_location: Mutex<HashMap<String, Vec<Warehouse>>>,
    created: Mutex<Vec<Warehouse>>,
    updated: Mutex<Vec<Warehouse>>,
    removed: Mutex<Vec<Warehouse>>,
    operations: Mutex<Vec<&'static str>>,
}

impl FakeWarehouseStore {
    pub fn stub_find(&self, code: &str, warehouse: Warehouse) {
        self.by_code.lock().unwrap().insert(code.to_string(), warehouse);
    }

    pub fn stub_active_at(&self, location: &str, warehouses: Vec<Warehouse>) {
        self.by_location
            .lock()
            .unwrap()
            .insert(location.to_string(), warehouses);
    }

    pub fn created(&self) -> Vec<Warehouse> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<Warehouse> {
        self.updated.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn removed(&self) -> Vec<Warehouse> {
        self.removed.lock().unwrap().clone()
    }

    /// Mutating calls in invocation order.
    pub fn operations(&self) -> Vec<&'static str> {
        self.operations.lock().unwrap().clone()
    }

    pub fn clear_created(&self) {
        self.created.lock().unwrap().clear();
    }
}

impl WarehouseStore for FakeWarehouseStore {
    fn get_all_active(&self) -> Vec<Warehouse> {
        self.by_code
            .lock()
            .unwrap()
            .values()
            .filter(|w| w.is_active())
            .cloned()
            .collect()
    }

    fn create(&self, warehouse: &Warehouse) {
        self.operations.lock().unwrap().push("create");
        self.created.lock().unwrap().push(warehouse.clone());
    }

    fn update(&self, warehouse: &Warehouse) {
        self.operations.lock().unwrap().push("update");
        self.updated.lock().unwrap().push(warehouse.clone());
    }

    fn remove(&self, warehouse: &Warehouse) {
        self.operations.lock().unwrap().push("remove");
        self.removed.lock().unwrap().push(warehouse.clone());
    }

    fn find_by_business_unit_code(&self, code: &str) -> Option<Warehouse> {
        self.by_code.lock().unwrap().get(code).cloned()
    }

    fn find_active_by_location(&self, location: &str) -> Vec<Warehouse> {
        self.by_location
            .lock()
            .unwrap()
            .get(location)
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Default)]
pub(crate) struct StubLocations {
    table: HashMap<String, Location>,
}

impl StubLocations {
    pub fn with(locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            table: locations
                .into_iter()
                .map(|l| (l.identification.clone(), l))
                .collect(),
        }
    }
}

impl LocationResolver for StubLocations {
    fn resolve_by_identifier(&self, identifier: &str) -> Option<Location> {
        self.table.get(identifier).cloned()
    }
}
