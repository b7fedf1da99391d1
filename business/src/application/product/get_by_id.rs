use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductWithImage;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::storage::ImageStorage;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductByIdParams,
    ) -> Result<ProductWithImage, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        let bytes = self.image_storage.read(&product.image_url).await?;

        Ok(ProductWithImage::new(product, &bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{RepositoryError, StorageError};
    use crate::domain::product::model::Product;
    use crate::domain::product::storage::ImageUpload;
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn next_id(&self) -> Result<ProductId, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Storage {}

        #[async_trait]
        impl ImageStorage for Storage {
            async fn store(&self, upload: &ImageUpload) -> Result<String, StorageError>;
            async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError>;
            async fn remove(&self, path: &str) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_with_image_when_exists() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .with(eq(ProductId::new(1)))
            .returning(|id| {
                Ok(Product {
                    id,
                    name: "Widget".to_string(),
                    description: "A widget".to_string(),
                    price: 10.0,
                    quantity: 5,
                    image_url: "uploads/1.png".to_string(),
                })
            });
        let mut storage = MockStorage::new();
        storage
            .expect_read()
            .with(eq("uploads/1.png"))
            .returning(|_| Ok(b"png".to_vec()));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(1),
            })
            .await
            .unwrap();

        assert_eq!(result.product.name, "Widget");
        assert_eq!(result.image, "cG5n");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_does_not_exist() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut storage = MockStorage::new();
        storage.expect_read().never();

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::new(9999),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}
