use serde::{Deserialize, Serialize};

use fulfilment_core::{DomainError, DomainResult, Entity, ProductId};

/// A catalogue product.
///
/// `price` is in the smallest currency unit (e.g. cents); absent means
/// not yet priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub stock: u32,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Option<u64>,
        stock: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id: ProductId::new(),
            name,
            description,
            price,
            stock,
        })
    }

    /// Apply an update: all client-settable fields are replaced together.
    pub fn apply_update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        price: Option<u64>,
        stock: u32,
    ) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.description = description;
        self.price = price;
        self.stock = stock;
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::invariant("Product name was not set on request."));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Port: persistence abstraction over products.
pub trait ProductRepository: Send + Sync {
    /// All products, sorted by name.
    fn list_all(&self) -> Vec<Product>;

    fn find_by_id(&self, id: ProductId) -> Option<Product>;

    fn create(&self, product: &Product);

    /// No-op when the id is unknown.
    fn update(&self, product: &Product);

    /// No-op when the id is unknown.
    fn delete(&self, id: ProductId);
}

impl<T: ProductRepository + ?Sized> ProductRepository for std::sync::Arc<T> {
    fn list_all(&self) -> Vec<Product> {
        (**self).list_all()
    }

    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn create(&self, product: &Product) {
        (**self).create(product)
    }

    fn update(&self, product: &Product) {
        (**self).update(product)
    }

    fn delete(&self, id: ProductId) {
        (**self).delete(id)
    }
}
