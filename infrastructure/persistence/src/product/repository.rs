use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

/// Process-local product store. Contents are lost on restart.
///
/// Identifiers come from a monotonic counter, so an id freed by a delete is
/// never handed out again.
pub struct ProductRepositoryInMemory {
    products: RwLock<BTreeMap<ProductId, Product>>,
    last_id: AtomicU64,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            last_id: AtomicU64::new(0),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn next_id(&self) -> Result<ProductId, RepositoryError> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(ProductId::new(id))
    }

    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or_else(RepositoryError::not_found)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(RepositoryError::duplicated());
        }
        products.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        let current = products
            .get_mut(&product.id)
            .ok_or_else(RepositoryError::not_found)?;
        *current = product.clone();
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;
        products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(RepositoryError::not_found)
    }
}
