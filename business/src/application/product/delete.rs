use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::use_cases::authorize_admin::{
    AuthorizeAdminParams, AuthorizeAdminUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::storage::ImageStorage;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_storage: Arc<dyn ImageStorage>,
    pub authorizer: Arc<dyn AuthorizeAdminUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.authorizer
            .execute(AuthorizeAdminParams {
                credential: params.credential,
            })
            .await?;

        let id = params.id.ok_or(ProductError::IdMissing)?;
        self.logger.info(&format!("Deleting product: {}", id));

        // Verify product exists before deleting
        let product = self
            .repository
            .get_by_id(id)
            .await
            .map_err(ProductError::from_lookup)?;

        self.repository
            .delete(id)
            .await
            .map_err(ProductError::from_lookup)?;

        if let Err(e) = self.image_storage.remove(&product.image_url).await {
            self.logger.warn(&format!(
                "Failed to remove image {} of deleted product {}: {}",
                product.image_url, id, e
            ));
        }

        self.logger.info(&format!("Product deleted: {}", id));
        Ok(())
    }
}
