use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Reserves the identifier for the next product. Identifiers are never reused.
    async fn next_id(&self) -> Result<ProductId, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Inserts a new product. Fails with `Duplicated` if the id is taken.
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Replaces an existing product. Fails with `NotFound` if it was deleted.
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
