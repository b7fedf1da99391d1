use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::use_cases::authorize_admin::{
    AuthorizeAdminParams, AuthorizeAdminUseCase,
};
use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::storage::ImageStorage;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductId;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub authorizer: Arc<dyn AuthorizeAdminUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.authorizer
            .execute(AuthorizeAdminParams {
                credential: params.credential,
            })
            .await?;

        let id: ProductId = params
            .product_id
            .ok_or(ProductError::IdMissing)?
            .parse()
            .map_err(|_| ProductError::InvalidId)?;
        self.logger.info(&format!("Updating product: {}", id));

        let mut product = self
            .repository
            .get_by_id(id)
            .await
            .map_err(ProductError::from_lookup)?;

        let mut changes = ProductChanges {
            name: params.name,
            description: params.description,
            price: params.price,
            quantity: params.quantity,
            image_url: None,
        };
        changes.validate()?;

        // An empty upload counts as no new image.
        if let Some(image) = params.image.filter(|image| !image.bytes.is_empty()) {
            changes.image_url = Some(self.image_storage.store(&image).await?);
        }
        let new_image = changes.image_url.clone();

        let replaced_image = product.apply(changes)?;

        // A product deleted meanwhile must stay deleted.
        if let Err(err) = self.repository.update(&product).await {
            if let Some(path) = new_image
                && let Err(e) = self.image_storage.remove(&path).await
            {
                self.logger.warn(&format!(
                    "Failed to remove image {} after failed update: {}",
                    path, e
                ));
            }
            return Err(ProductError::from_lookup(err));
        }

        if let Some(old) = replaced_image {
            match self.image_storage.remove(&old).await {
                Ok(()) => {}
                Err(StorageError::NotFound) => self
                    .logger
                    .warn(&format!("Previous image {} was already missing", old)),
                Err(e) => self
                    .logger
                    .warn(&format!("Failed to remove previous image {}: {}", old, e)),
            }
        }

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AuthError;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::storage::ImageUpload;
    use crate::domain::user::model::User;
    use mockall::mock;

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
        pub Authorizer {}

        #[async_trait]
        impl AuthorizeAdminUseCase for Authorizer {
            async fn execute(&self, params: AuthorizeAdminParams) -> Result<User, AuthError>;
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

    fn admin() -> Arc<dyn AuthorizeAdminUseCase> {
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_execute()
            .returning(|p| Ok(User::new(p.credential, true)));
        Arc::new(authorizer)
    }

    fn existing(id: ProductId) -> Product {
        Product {
            id,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 10.0,
            quantity: 5,
            image_url: "uploads/old.png".to_string(),
        }
    }

    fn price_only(price: f64) -> UpdateProductParams {
        UpdateProductParams {
            credential: "Bearer admin".to_string(),
            product_id: Some("1".to_string()),
            name: None,
            description: None,
            price: Some(price),
            quantity: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn should_update_only_price_when_only_price_is_given() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|id| Ok(existing(id)));
        repo.expect_update().times(1).returning(|_| Ok(()));
        let mut storage = MockStorage::new();
        storage.expect_store().never();
        storage.expect_remove().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let product = use_case.execute(price_only(25.0)).await.unwrap();

        assert_eq!(product.price, 25.0);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.quantity, 5);
        assert_eq!(product.image_url, "uploads/old.png");
    }

    #[tokio::test]
    async fn should_replace_image_and_remove_previous_file() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|id| Ok(existing(id)));
        repo.expect_update().returning(|_| Ok(()));
        let mut storage = MockStorage::new();
        storage
            .expect_store()
            .returning(|_| Ok("uploads/new.png".to_string()));
        storage
            .expect_remove()
            .withf(|path| path == "uploads/old.png")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                image: Some(ImageUpload {
                    file_name: Some("new.png".to_string()),
                    bytes: vec![9, 9],
                }),
                price: None,
                ..price_only(0.0)
            })
            .await
            .unwrap();

        assert_eq!(product.image_url, "uploads/new.png");
        assert_eq!(product.price, 10.0);
    }

    #[tokio::test]
    async fn should_succeed_when_previous_image_is_already_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|id| Ok(existing(id)));
        repo.expect_update().returning(|_| Ok(()));
        let mut storage = MockStorage::new();
        storage
            .expect_store()
            .returning(|_| Ok("uploads/new.png".to_string()));
        storage
            .expect_remove()
            .returning(|_| Err(StorageError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                image: Some(ImageUpload {
                    file_name: None,
                    bytes: vec![1],
                }),
                ..price_only(1.0)
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_when_product_id_is_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(MockStorage::new()),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                product_id: None,
                ..price_only(1.0)
            })
            .await;

        assert!(matches!(result, Err(ProductError::IdMissing)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_does_not_exist() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(MockStorage::new()),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let result = use_case.execute(price_only(1.0)).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_reject_blank_name_without_storing_image() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|id| Ok(existing(id)));
        repo.expect_update().never();
        let mut storage = MockStorage::new();
        storage.expect_store().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                name: Some(" ".to_string()),
                image: Some(ImageUpload {
                    file_name: None,
                    bytes: vec![1],
                }),
                ..price_only(1.0)
            })
            .await;

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[tokio::test]
    async fn should_reject_update_when_not_admin() {
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_execute()
            .returning(|_| Err(AuthError::Forbidden));
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().never();
        repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(MockStorage::new()),
            authorizer: Arc::new(authorizer),
            logger: mock_logger(),
        };

        let result = use_case.execute(price_only(1.0)).await;

        assert!(matches!(result, Err(ProductError::Auth(AuthError::Forbidden))));
    }

    #[tokio::test]
    async fn should_not_resurrect_product_deleted_while_image_is_stored() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let deleted = Arc::new(AtomicBool::new(false));

        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|id| Ok(existing(id)));
        let seen = deleted.clone();
        repo.expect_update().times(1).returning(move |_| {
            if seen.load(Ordering::SeqCst) {
                Err(RepositoryError::NotFound)
            } else {
                Ok(())
            }
        });

        // A concurrent delete removes the record and frees its file name,
        // which the store then hands out again.
        let mut storage = MockStorage::new();
        let deleting = deleted.clone();
        storage.expect_store().returning(move |_| {
            deleting.store(true, Ordering::SeqCst);
            Ok("uploads/old.png".to_string())
        });
        storage
            .expect_remove()
            .withf(|path| path == "uploads/old.png")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                image: Some(ImageUpload {
                    file_name: Some("new.png".to_string()),
                    bytes: vec![7],
                }),
                ..price_only(1.0)
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn should_keep_new_image_when_store_reuses_previous_path() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|id| Ok(existing(id)));
        repo.expect_update().times(1).returning(|_| Ok(()));
        let mut storage = MockStorage::new();
        storage
            .expect_store()
            .returning(|_| Ok("uploads/old.png".to_string()));
        storage.expect_remove().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                image: Some(ImageUpload {
                    file_name: Some("new.png".to_string()),
                    bytes: vec![7],
                }),
                ..price_only(1.0)
            })
            .await
            .unwrap();

        assert_eq!(product.image_url, "uploads/old.png");
    }

    #[tokio::test]
    async fn should_reject_non_numeric_product_id_after_authorizing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(MockStorage::new()),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                product_id: Some("abc".to_string()),
                ..price_only(1.0)
            })
            .await;

        assert!(matches!(result, Err(ProductError::InvalidId)));
    }

    #[tokio::test]
    async fn should_report_forbidden_before_parsing_product_id() {
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_execute()
            .returning(|_| Err(AuthError::Forbidden));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(MockProductRepo::new()),
            image_storage: Arc::new(MockStorage::new()),
            authorizer: Arc::new(authorizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                product_id: Some("abc".to_string()),
                ..price_only(1.0)
            })
            .await;

        assert!(matches!(result, Err(ProductError::Auth(AuthError::Forbidden))));
    }

    #[tokio::test]
    async fn should_reject_non_finite_price_without_storing_image() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|id| Ok(existing(id)));
        repo.expect_update().never();
        let mut storage = MockStorage::new();
        storage.expect_store().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            image_storage: Arc::new(storage),
            authorizer: admin(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                image: Some(ImageUpload {
                    file_name: None,
                    bytes: vec![1],
                }),
                ..price_only(f64::INFINITY)
            })
            .await;

        assert!(matches!(result, Err(ProductError::InvalidPrice)));
    }
}
