use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::storage::ImageUpload;

/// Partial update. Absent fields are left unchanged.
///
/// `product_id` is the raw form value; it is parsed only once the caller is
/// authorized.
pub struct UpdateProductParams {
    pub credential: String,
    pub product_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub image: Option<ImageUpload>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
