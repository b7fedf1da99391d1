use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::use_cases::authorize_admin::{
    AuthorizeAdminParams, AuthorizeAdminUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::storage::ImageStorage;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub authorizer: Arc<dyn AuthorizeAdminUseCase>,
    pub logger: Arc<dyn Logger>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.authorizer
            .execute(AuthorizeAdminParams {
                credential: params.credential,
            })
            .await?;

        let (Some(name), Some(description), Some(price), Some(quantity)) = (
            present(params.name),
            present(params.description),
            params.price,
            params.quantity,
        ) else {
            return Err(ProductError::MissingFields);
        };
        if !price.is_finite() {
            return Err(ProductError::InvalidPrice);
        }
        let image = params
            .image
            .filter(|image| !image.bytes.is_empty())
            .ok_or(ProductError::ImageMissing)?;

        self.logger.info(&format!("Creating product: {}", name));

        let image_url = self.image_storage.store(&image).await?;

        let saved = async {
            let id = self.repository.next_id().await?;
            let product = Product::new(
                id,
                NewProductProps {
                    name,
                    description,
                    price,
                    quantity,
                    image_url: image_url.clone(),
                },
            )?;
            self.repository.save(&product).await?;
            Ok::<_, ProductError>(product)
        }
        .await;

        match saved {
            Ok(product) => {
                self.logger
                    .info(&format!("Product created with id: {}", product.id));
                Ok(product)
            }
            Err(err) => {
                if let Err(e) = self.image_storage.remove(&image_url).await {
                    self.logger.warn(&format!(
                        "Failed to remove image {} after failed create: {}",
                        image_url, e
                    ));
                }
                Err(err)
            }
        }
    }
}
