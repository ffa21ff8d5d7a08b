use chrono::Utc;

use fulfilment_core::{DomainError, DomainResult};

use crate::store::WarehouseStore;

/// Soft-deletes an active warehouse. No physical deletion ever occurs.
#[derive(Debug)]
pub struct ArchiveWarehouse<S> {
    warehouses: S,
}

impl<S> ArchiveWarehouse<S> {
    pub fn new(warehouses: S) -> Self {
        Self { warehouses }
    }
}

impl<S> ArchiveWarehouse<S>
where
    S: WarehouseStore,
{
    /// Archive the active warehouse carrying this business unit code.
    pub fn archive(&self, business_unit_code: &str) -> DomainResult<()> {
        let mut existing = self
            .warehouses
            .find_by_business_unit_code(business_unit_code)
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Warehouse with business unit code '{business_unit_code}' not found."
                ))
            })?;

        // The lookup is active-scoped, so this guards stale lookups only.
        if existing.archived_at.is_some() {
            return Err(DomainError::validation(format!(
                "Warehouse with business unit code '{business_unit_code}' is already archived."
            )));
        }

        existing.archived_at = Some(Utc::now());
        self.warehouses.update(&existing);

        tracing::info!(business_unit_code, "warehouse archived");

        Ok(())
    }
}
