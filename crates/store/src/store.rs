use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::filter::ProductFilter;
use crate::product::{seed_products, Product, ProductPayload};

/// The live product collection.
///
/// Records keep insertion order. Every operation takes the lock exactly once,
/// so each call is atomic with respect to concurrent callers.
#[derive(Debug)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// A store holding the three seed records.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.products.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.products.write().map_err(|_| StoreError::Poisoned)
    }

    /// Products matching `filter`, in collection order.
    pub fn list(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let products = self.read()?;
        Ok(products.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    pub fn get(&self, id: &str) -> StoreResult<Product> {
        self.read()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    /// Append a new record under a freshly generated id.
    pub fn insert(&self, payload: ProductPayload) -> StoreResult<Product> {
        let mut products = self.write()?;
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !products.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };
        let product = Product::from_payload(id, payload);
        products.push(product.clone());
        debug!(id = %product.id, "product inserted");
        Ok(product)
    }

    /// Overwrite every field of the record with `id`.
    pub fn replace(&self, id: &str, payload: ProductPayload) -> StoreResult<Product> {
        let mut products = self.write()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        product.replace_with(payload);
        debug!(id, "product replaced");
        Ok(product.clone())
    }

    /// Remove and return the record with `id`. Remaining records keep their order.
    pub fn delete(&self, id: &str) -> StoreResult<Product> {
        let mut products = self.write()?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        let removed = products.remove(index);
        debug!(id, "product deleted");
        Ok(removed)
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
