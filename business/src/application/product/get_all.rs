use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductWithImage;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::storage::ImageStorage;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductWithImage>, ProductError> {
        self.logger.info("Fetching all products");

        let products = self.repository.get_all().await?;

        // One unreadable image fails the whole listing.
        let mut result = Vec::with_capacity(products.len());
        for product in products {
            let bytes = self.image_storage.read(&product.image_url).await?;
            result.push(ProductWithImage::new(product, &bytes));
        }

        Ok(result)
    }
}
