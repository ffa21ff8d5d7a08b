use serde::{Deserialize, Serialize};

use crate::store::Store;

/// Which mutation a [`StoreChangeEvent`] describes. Deletes are not mirrored
/// to the legacy system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Create,
    Update,
}

/// Outbound notification that a store changed, delivered to the legacy
/// system only after the enclosing unit of work commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChangeEvent {
    pub store: Store,
    pub operation_type: OperationType,
}

impl StoreChangeEvent {
    pub fn created(store: Store) -> Self {
        Self {
            store,
            operation_type: OperationType::Create,
        }
    }

    pub fn updated(store: Store) -> Self {
        Self {
            store,
            operation_type: OperationType::Update,
        }
    }
}

/// Port: the legacy store management system.
///
/// Delivery is fire-and-forget and at-least-once; implementations must not
/// surface failures into the caller's control flow.
pub trait LegacyStoreManager: Send + Sync {
    fn create_store_on_legacy_system(&self, store: &Store);

    fn update_store_on_legacy_system(&self, store: &Store);
}

impl<T: LegacyStoreManager + ?Sized> LegacyStoreManager for std::sync::Arc<T> {
    fn create_store_on_legacy_system(&self, store: &Store) {
        (**self).create_store_on_legacy_system(store)
    }

    fn update_store_on_legacy_system(&self, store: &Store) {
        (**self).update_store_on_legacy_system(store)
    }
}
