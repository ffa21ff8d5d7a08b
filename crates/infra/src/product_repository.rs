use std::sync::{PoisonError, RwLock};

use fulfilment_core::ProductId;
use fulfilment_products::{Product, ProductRepository};

/// In-memory product repository.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository preloaded with the reference data set.
    pub fn seeded() -> Self {
        let repo = Self::new();
        for (name, description, price, stock) in [
            ("TONSTAD", "TV bench", 13999_u64, 10_u32),
            ("KALLAX", "Shelving unit", 7999, 25),
            ("BESTÅ", "Storage combination", 24500, 8),
        ] {
            let product = Product::new(name, Some(description.to_string()), Some(price), stock)
                .expect("seed names are non-empty");
            repo.create(&product);
        }
        repo
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Product>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Product>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list_all(&self) -> Vec<Product> {
        let mut products = self.read().clone();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    fn create(&self, product: &Product) {
        self.write().push(product.clone());
    }

    fn update(&self, product: &Product) {
        let mut rows = self.write();
        if let Some(row) = rows.iter_mut().find(|p| p.id == product.id) {
            *row = product.clone();
        }
    }

    fn delete(&self, id: ProductId) {
        self.write().retain(|p| p.id != id);
    }
}
