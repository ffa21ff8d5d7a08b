use std::sync::Arc;

use fulfilment_infra::{
    InMemoryProductRepository, InMemoryStoreRepository, InMemoryWarehouseStore,
    LoggingLegacyStoreManager, StaticLocationDirectory, StoreChangeOutbox,
};
use fulfilment_warehouses::{ArchiveWarehouse, CreateWarehouse, ReplaceWarehouse};

type Warehouses = Arc<InMemoryWarehouseStore>;
type Locations = Arc<StaticLocationDirectory>;

/// Adapters and use cases shared by every handler.
///
/// The use cases are generic over their ports; here they are instantiated
/// with the in-memory reference adapters. Swapping in database-backed
/// adapters would change only this wiring.
pub struct AppServices {
    pub warehouse_store: Warehouses,
    pub create_warehouse: CreateWarehouse<Warehouses, Locations>,
    pub archive_warehouse: ArchiveWarehouse<Warehouses>,
    pub replace_warehouse: ReplaceWarehouse<Warehouses, Locations>,
    pub stores: Arc<InMemoryStoreRepository>,
    pub products: Arc<InMemoryProductRepository>,
    pub store_outbox: StoreChangeOutbox<LoggingLegacyStoreManager>,
}

/// Wire the in-memory adapters, seeded with the reference data set.
pub fn build_services() -> AppServices {
    let warehouse_store = Arc::new(InMemoryWarehouseStore::seeded());
    let locations = Arc::new(StaticLocationDirectory::new());

    AppServices {
        warehouse_store: warehouse_store.clone(),
        create_warehouse: CreateWarehouse::new(warehouse_store.clone(), locations.clone()),
        archive_warehouse: ArchiveWarehouse::new(warehouse_store.clone()),
        replace_warehouse: ReplaceWarehouse::new(warehouse_store, locations),
        stores: Arc::new(InMemoryStoreRepository::seeded()),
        products: Arc::new(InMemoryProductRepository::seeded()),
        store_outbox: StoreChangeOutbox::new(LoggingLegacyStoreManager::new()),
    }
}
