use chrono::Utc;

use fulfilment_core::{DomainError, DomainResult};

use crate::location::{Location, LocationResolver};
use crate::store::WarehouseStore;
use crate::warehouse::Warehouse;

/// Validates and inserts a new active warehouse.
///
/// Validation is fail-fast: every failure is a distinct [`DomainError`] with
/// a human-readable reason, raised before any persistence side effect.
#[derive(Debug)]
pub struct CreateWarehouse<S, L> {
    warehouses: S,
    locations: L,
}

impl<S, L> CreateWarehouse<S, L> {
    pub fn new(warehouses: S, locations: L) -> Self {
        Self {
            warehouses,
            locations,
        }
    }
}

impl<S, L> CreateWarehouse<S, L>
where
    S: WarehouseStore,
    L: LocationResolver,
{
    /// Create a warehouse from a candidate with timestamps unset.
    ///
    /// On success the candidate is stamped with `created_at` and persisted;
    /// the populated warehouse is returned.
    pub fn create(&self, mut candidate: Warehouse) -> DomainResult<Warehouse> {
        self.validate_business_unit_code_uniqueness(&candidate.business_unit_code)?;

        let location = self.validate_location_exists(&candidate.location)?;

        let active_at_location = self.warehouses.find_active_by_location(&candidate.location);

        validate_creation_feasibility(&active_at_location, &location)?;
        validate_capacity(&active_at_location, &candidate, &location)?;
        validate_stock_within_capacity(&candidate)?;

        candidate.created_at = Some(Utc::now());
        self.warehouses.create(&candidate);

        tracing::info!(
            business_unit_code = %candidate.business_unit_code,
            location = %candidate.location,
            "warehouse created"
        );

        Ok(candidate)
    }

    fn validate_business_unit_code_uniqueness(&self, business_unit_code: &str) -> DomainResult<()> {
        if self
            .warehouses
            .find_by_business_unit_code(business_unit_code)
            .is_some()
        {
            return Err(DomainError::validation(format!(
                "A warehouse with business unit code '{business_unit_code}' already exists."
            )));
        }
        Ok(())
    }

    fn validate_location_exists(&self, location_identifier: &str) -> DomainResult<Location> {
        self.locations
            .resolve_by_identifier(location_identifier)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Location '{location_identifier}' is not a valid location."
                ))
            })
    }
}

fn validate_creation_feasibility(
    active_at_location: &[Warehouse],
    location: &Location,
) -> DomainResult<()> {
    if active_at_location.len() as u64 >= u64::from(location.max_number_of_warehouses) {
        return Err(DomainError::validation(format!(
            "Maximum number of warehouses ({}) already reached at location '{}'.",
            location.max_number_of_warehouses, location.identification
        )));
    }
    Ok(())
}

fn validate_capacity(
    active_at_location: &[Warehouse],
    candidate: &Warehouse,
    location: &Location,
) -> DomainResult<()> {
    let current_capacity_sum: u64 = active_at_location
        .iter()
        .map(|w| u64::from(w.capacity))
        .sum();
    if current_capacity_sum + u64::from(candidate.capacity) > u64::from(location.max_capacity) {
        return Err(DomainError::validation(format!(
            "Adding capacity {} would exceed the maximum capacity ({}) at location '{}'.",
            candidate.capacity, location.max_capacity, location.identification
        )));
    }
    Ok(())
}

fn validate_stock_within_capacity(candidate: &Warehouse) -> DomainResult<()> {
    if candidate.stock > candidate.capacity {
        return Err(DomainError::validation(format!(
            "Stock ({}) cannot exceed capacity ({}).",
            candidate.stock, candidate.capacity
        )));
    }
    Ok(())
}
