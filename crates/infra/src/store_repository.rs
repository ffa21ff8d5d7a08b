use std::sync::{PoisonError, RwLock};

use fulfilment_core::StoreId;
use fulfilment_stores::{Store, StoreRepository};

/// In-memory store repository. Plain CRUD, physical deletes.
#[derive(Debug, Default)]
pub struct InMemoryStoreRepository {
    rows: RwLock<Vec<Store>>,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository preloaded with the reference data set.
    pub fn seeded() -> Self {
        let repo = Self::new();
        for (name, quantity) in [("TONSTAD", 10), ("KALLAX", 15), ("BESTÅ", 20)] {
            let store = Store::new(name, quantity).expect("seed names are non-empty");
            repo.create(&store);
        }
        repo
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Store>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Store>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StoreRepository for InMemoryStoreRepository {
    fn list_all(&self) -> Vec<Store> {
        let mut stores = self.read().clone();
        stores.sort_by(|a, b| a.name.cmp(&b.name));
        stores
    }

    fn find_by_id(&self, id: StoreId) -> Option<Store> {
        self.read().iter().find(|s| s.id == id).cloned()
    }

    fn create(&self, store: &Store) {
        self.write().push(store.clone());
    }

    fn update(&self, store: &Store) {
        let mut rows = self.write();
        if let Some(row) = rows.iter_mut().find(|s| s.id == store.id) {
            *row = store.clone();
        }
    }

    fn delete(&self, id: StoreId) {
        self.write().retain(|s| s.id != id);
    }
}
