use chrono::Utc;

use fulfilment_core::{DomainError, DomainResult};

use crate::location::LocationResolver;
use crate::store::WarehouseStore;
use crate::warehouse::Warehouse;

/// Atomically retires one active warehouse and activates its successor at a
/// (possibly different) location, carrying the stock forward unchanged.
#[derive(Debug)]
pub struct ReplaceWarehouse<S, L> {
    warehouses: S,
    locations: L,
}

impl<S, L> ReplaceWarehouse<S, L> {
    pub fn new(warehouses: S, locations: L) -> Self {
        Self {
            warehouses,
            locations,
        }
    }
}

impl<S, L> ReplaceWarehouse<S, L>
where
    S: WarehouseStore,
    L: LocationResolver,
{
    /// Replace the active warehouse carrying `business_unit_code` with the
    /// candidate. Returns the new active record.
    ///
    /// The archive of the old record is persisted before the create of the
    /// new one, so a failure between the two steps can never leave two
    /// active records under the same business unit code. The surrounding
    /// transaction boundary belongs to the caller.
    pub fn replace(
        &self,
        business_unit_code: &str,
        mut candidate: Warehouse,
    ) -> DomainResult<Warehouse> {
        candidate.business_unit_code = business_unit_code.to_string();

        let existing = self
            .warehouses
            .find_by_business_unit_code(business_unit_code)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Warehouse with business unit code '{business_unit_code}' not found."
                ))
            })?;

        validate_capacity_accommodation(&candidate, &existing)?;
        validate_stock_matching(&candidate, &existing)?;

        let location = self
            .locations
            .resolve_by_identifier(&candidate.location)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Location '{}' is not a valid location.",
                    candidate.location
                ))
            })?;

        // Capacity headroom at the target location. The record being replaced
        // is excluded from the sum so replacing in place does not count itself.
        let adjusted_capacity_sum: u64 = self
            .warehouses
            .find_active_by_location(&candidate.location)
            .iter()
            .filter(|w| w.business_unit_code != existing.business_unit_code)
            .map(|w| u64::from(w.capacity))
            .sum();
        if adjusted_capacity_sum + u64::from(candidate.capacity) > u64::from(location.max_capacity)
        {
            return Err(DomainError::validation(format!(
                "New warehouse capacity would exceed the maximum capacity ({}) at location '{}'.",
                location.max_capacity, location.identification
            )));
        }

        if candidate.stock > candidate.capacity {
            return Err(DomainError::validation(format!(
                "Stock ({}) cannot exceed capacity ({}).",
                candidate.stock, candidate.capacity
            )));
        }

        // Archive-then-create, in that order.
        let mut retired = existing;
        retired.archived_at = Some(Utc::now());
        self.warehouses.update(&retired);

        candidate.created_at = Some(Utc::now());
        candidate.archived_at = None;
        self.warehouses.create(&candidate);

        tracing::info!(
            business_unit_code,
            from_location = %retired.location,
            to_location = %candidate.location,
            "warehouse replaced"
        );

        Ok(candidate)
    }
}

fn validate_capacity_accommodation(candidate: &Warehouse, existing: &Warehouse) -> DomainResult<()> {
    if candidate.capacity < existing.stock {
        return Err(DomainError::validation(format!(
            "New warehouse capacity ({}) cannot accommodate the existing stock ({}).",
            candidate.capacity, existing.stock
        )));
    }
    Ok(())
}

fn validate_stock_matching(candidate: &Warehouse, existing: &Warehouse) -> DomainResult<()> {
    if candidate.stock != existing.stock {
        return Err(DomainError::validation(format!(
            "New warehouse stock ({}) must match the existing warehouse stock ({}).",
            candidate.stock, existing.stock
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::testing::{FakeWarehouseStore, StubLocations};

    fn use_case<'a>(
        store: &'a FakeWarehouseStore,
        locations: &'a StubLocations,
    ) -> ReplaceWarehouse<&'a FakeWarehouseStore, &'a StubLocations> {
        ReplaceWarehouse::new(store, locations)
    }

    #[test]
    fn replaces_warehouse_in_place() {
        let store = FakeWarehouseStore::default();
        let mut existing = Warehouse::new("MWH.001", "ZWOLLE-001", 30, 10);
        existing.created_at = Some(Utc::now());
        store.stub_find("MWH.001", existing.clone());
        store.stub_active_at("ZWOLLE-001", vec![existing]);
        let locations = StubLocations::with([Location::new("ZWOLLE-001", 1, 40)]);

        let replacement = use_case(&store, &locations)
            .replace("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 40, 10))
            .expect("replacement fits once the old unit is excluded");

        let updated = store.updated();
        assert_eq!(updated.len(), 1);
        assert!(updated[0].archived_at.is_some(), "old record archived");

        assert_eq!(replacement.stock, 10, "stock carried forward");
        assert!(replacement.created_at.is_some());
        assert!(replacement.archived_at.is_none());
        assert_eq!(store.created(), vec![replacement]);
    }

    #[test]
    fn archives_before_creating() {
        let store = FakeWarehouseStore::default();
        let existing = Warehouse::new("MWH.001", "ZWOLLE-001", 30, 10);
        store.stub_find("MWH.001", existing.clone());
        store.stub_active_at("ZWOLLE-001", vec![existing]);
        let locations = StubLocations::with([Location::new("ZWOLLE-001", 1, 40)]);

        use_case(&store, &locations)
            .replace("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 40, 10))
            .expect("replacement succeeds");

        let ops = store.operations();
        assert_eq!(ops, vec!["update", "create"]);
    }

    #[test]
    fn rejects_replace_when_warehouse_not_found() {
        let store = FakeWarehouseStore::default();
        let locations = StubLocations::with([Location::new("ZWOLLE-001", 1, 40)]);

        let err = use_case(&store, &locations)
            .replace("NON.EXISTENT", Warehouse::new("NON.EXISTENT", "ZWOLLE-001", 40, 10))
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(store.updated().is_empty());
        assert!(store.created().is_empty());
    }

    #[test]
    fn rejects_when_new_capacity_cannot_accommodate_existing_stock() {
        let store = FakeWarehouseStore::default();
        store.stub_find("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 30, 10));
        let locations = StubLocations::with([Location::new("ZWOLLE-001", 1, 40)]);

        let err = use_case(&store, &locations)
            .replace("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 5, 10))
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.updated().is_empty());
        assert!(store.created().is_empty());
    }

    #[test]
    fn rejects_when_stock_does_not_match() {
        let store = FakeWarehouseStore::default();
        store.stub_find("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 30, 10));
        let locations = StubLocations::with([Location::new("ZWOLLE-001", 1, 40)]);

        let err = use_case(&store, &locations)
            .replace("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 40, 15))
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.updated().is_empty());
        assert!(store.created().is_empty());
    }

    #[test]
    fn rejects_when_new_location_is_invalid() {
        let store = FakeWarehouseStore::default();
        store.stub_find("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 30, 10));
        let locations = StubLocations::default();

        let err = use_case(&store, &locations)
            .replace("MWH.001", Warehouse::new("MWH.001", "INVALID-LOC", 40, 10))
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(store.updated().is_empty());
        assert!(store.created().is_empty());
    }

    #[test]
    fn rejects_when_target_location_capacity_would_be_exceeded() {
        let store = FakeWarehouseStore::default();
        store.stub_find("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 30, 10));
        store.stub_active_at(
            "AMSTERDAM-001",
            vec![Warehouse::new("MWH.012", "AMSTERDAM-001", 60, 5)],
        );
        let locations = StubLocations::with([Location::new("AMSTERDAM-001", 5, 100)]);

        // Moving to AMSTERDAM-001: 60 in place there, candidate 50 exceeds 100.
        let err = use_case(&store, &locations)
            .replace("MWH.001", Warehouse::new("MWH.001", "AMSTERDAM-001", 50, 10))
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.updated().is_empty());
        assert!(store.created().is_empty());
    }

    #[test]
    fn cross_location_replace_counts_the_full_target_occupancy() {
        let store = FakeWarehouseStore::default();
        store.stub_find("MWH.001", Warehouse::new("MWH.001", "ZWOLLE-001", 30, 10));
        store.stub_active_at(
            "AMSTERDAM-001",
            vec![Warehouse::new("MWH.012", "AMSTERDAM-001", 60, 5)],
        );
        let locations = StubLocations::with([Location::new("AMSTERDAM-001", 5, 100)]);

        // The old unit sits at ZWOLLE-001, so nothing is excluded from the
        // AMSTERDAM-001 sum: 60 + 40 fits exactly.
        let replacement = use_case(&store, &locations)
            .replace("MWH.001", Warehouse::new("MWH.001", "AMSTERDAM-001", 40, 10))
            .expect("move fits at the target");

        assert_eq!(replacement.location, "AMSTERDAM-001");
        assert_eq!(replacement.stock, 10);
    }
}
