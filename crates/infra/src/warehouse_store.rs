use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use fulfilment_core::WarehouseId;
use fulfilment_warehouses::{Warehouse, WarehouseStore};

/// A persisted warehouse row: the record id identifies this row forever,
/// across archival; the business unit code only identifies it while active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseRecord {
    pub id: WarehouseId,
    pub warehouse: Warehouse,
}

/// In-memory warehouse store.
///
/// Archived rows are retained forever (soft delete); every query on the
/// [`WarehouseStore`] port is scoped to active rows. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    records: RwLock<Vec<WarehouseRecord>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the reference data set.
    pub fn seeded() -> Self {
        let store = Self::new();
        for (code, location, capacity, stock) in [
            ("MWH.001", "ZWOLLE-001", 40, 10),
            ("MWH.012", "AMSTERDAM-001", 50, 25),
            ("MWH.023", "TILBURG-001", 30, 5),
        ] {
            let mut warehouse = Warehouse::new(code, location, capacity, stock);
            warehouse.created_at = Some(Utc::now());
            store.create(&warehouse);
        }
        store
    }

    /// Active rows with their record ids (adapter-level, used by the
    /// transport to expose addressable ids; not part of the port).
    pub fn list_active_records(&self) -> Vec<WarehouseRecord> {
        self.read()
            .iter()
            .filter(|r| r.warehouse.is_active())
            .cloned()
            .collect()
    }

    /// The active row with this record id, if any.
    pub fn find_record_by_id(&self, id: WarehouseId) -> Option<WarehouseRecord> {
        self.read()
            .iter()
            .find(|r| r.id == id && r.warehouse.is_active())
            .cloned()
    }

    /// Every row, archived ones included. Test/inspection surface.
    pub fn all_records(&self) -> Vec<WarehouseRecord> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<WarehouseRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<WarehouseRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    fn get_all_active(&self) -> Vec<Warehouse> {
        self.read()
            .iter()
            .filter(|r| r.warehouse.is_active())
            .map(|r| r.warehouse.clone())
            .collect()
    }

    fn create(&self, warehouse: &Warehouse) {
        self.write().push(WarehouseRecord {
            id: WarehouseId::new(),
            warehouse: warehouse.clone(),
        });
    }

    fn update(&self, warehouse: &Warehouse) {
        let mut records = self.write();
        if let Some(record) = records.iter_mut().find(|r| {
            r.warehouse.is_active()
                && r.warehouse.business_unit_code == warehouse.business_unit_code
        }) {
            // created_at is kept from the original insert.
            record.warehouse.location = warehouse.location.clone();
            record.warehouse.capacity = warehouse.capacity;
            record.warehouse.stock = warehouse.stock;
            record.warehouse.archived_at = warehouse.archived_at;
        }
    }

    fn remove(&self, warehouse: &Warehouse) {
        let mut records = self.write();
        if let Some(idx) = records.iter().position(|r| {
            r.warehouse.is_active()
                && r.warehouse.business_unit_code == warehouse.business_unit_code
        }) {
            records.remove(idx);
        }
    }

    fn find_by_business_unit_code(&self, code: &str) -> Option<Warehouse> {
        self.read()
            .iter()
            .find(|r| r.warehouse.is_active() && r.warehouse.business_unit_code == code)
            .map(|r| r.warehouse.clone())
    }

    fn find_active_by_location(&self, location: &str) -> Vec<Warehouse> {
        self.read()
            .iter()
            .filter(|r| r.warehouse.is_active() && r.warehouse.location == location)
            .map(|r| r.warehouse.clone())
            .collect()
    }
}
