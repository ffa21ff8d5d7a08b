use serde::{Deserialize, Serialize};

use fulfilment_core::{DomainError, DomainResult, Entity, StoreId};

/// A retail store carrying fulfilment stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub quantity_products_in_stock: u32,
}

impl Store {
    /// Build a new store, validating the name.
    pub fn new(name: impl Into<String>, quantity_products_in_stock: u32) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id: StoreId::new(),
            name,
            quantity_products_in_stock,
        })
    }

    /// Apply an update: name and stock quantity are replaced together.
    pub fn rename(&mut self, name: impl Into<String>, quantity_products_in_stock: u32) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.quantity_products_in_stock = quantity_products_in_stock;
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::invariant("Store name was not set on request."));
    }
    Ok(())
}

impl Entity for Store {
    type Id = StoreId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Port: persistence abstraction over stores. Physical deletes are allowed;
/// stores are not soft-deleted.
pub trait StoreRepository: Send + Sync {
    /// All stores, sorted by name.
    fn list_all(&self) -> Vec<Store>;

    fn find_by_id(&self, id: StoreId) -> Option<Store>;

    fn create(&self, store: &Store);

    /// No-op when the id is unknown.
    fn update(&self, store: &Store);

    /// No-op when the id is unknown.
    fn delete(&self, id: StoreId);
}

impl<T: StoreRepository + ?Sized> StoreRepository for std::sync::Arc<T> {
    fn list_all(&self) -> Vec<Store> {
        (**self).list_all()
    }

    fn find_by_id(&self, id: StoreId) -> Option<Store> {
        (**self).find_by_id(id)
    }

    fn create(&self, store: &Store) {
        (**self).create(store)
    }

    fn update(&self, store: &Store) {
        (**self).update(store)
    }

    fn delete(&self, id: StoreId) {
        (**self).delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_gets_an_id() {
        let store = Store::new("TONSTAD", 10).expect("valid name");
        assert_eq!(store.name, "TONSTAD");
        assert_eq!(store.quantity_products_in_stock, 10);
    }

    #[test]
    fn rejects_blank_name() {
        let err = Store::new("   ", 5).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn rename_rejects_blank_name() {
        let mut store = Store::new("KALLAX", 5).expect("valid name");
        let err = store.rename("", 9).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(store.name, "KALLAX");
    }

    #[test]
    fn rename_replaces_name_and_quantity() {
        let mut store = Store::new("KALLAX", 5).expect("valid name");
        store.rename("KALLAX_UPDATED", 99).expect("valid rename");
        assert_eq!(store.name, "KALLAX_UPDATED");
        assert_eq!(store.quantity_products_in_stock, 99);
    }
}
