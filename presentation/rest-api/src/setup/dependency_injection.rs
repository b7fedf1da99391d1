use std::sync::Arc;

use identity::client::IdentityClient;
use identity::whoami_verifier::WhoAmIVerifier;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryInMemory;
use persistence::user::repository::UserRepositoryInMemory;
use storage::image::filesystem::ImageStorageFs;

use business::application::auth::authorize_admin::AuthorizeAdminUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::auth::services::IdentityVerifier;

use crate::config::app_config::AppConfig;
use crate::config::storage_config::StorageConfig;
use crate::config::users_config::UsersConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let identity_client =
            IdentityClient::new(config.identity.whoami_url.clone(), config.identity.timeout)?;
        let verifier = Arc::new(WhoAmIVerifier::new(identity_client));

        Self::with_verifier(&config.storage, &config.users, verifier).await
    }

    /// Wires everything around the given identity verifier.
    pub async fn with_verifier(
        storage_config: &StorageConfig,
        users_config: &UsersConfig,
        verifier: Arc<dyn IdentityVerifier>,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::HealthApi::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::new());
        let user_repository = Arc::new(UserRepositoryInMemory::with_users(users_config.users()));

        let image_storage = Arc::new(ImageStorageFs::new(storage_config.upload_dir.clone()));
        image_storage.ensure_upload_dir().await?;

        let authorizer = Arc::new(AuthorizeAdminUseCaseImpl {
            verifier,
            user_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_storage: image_storage.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            image_storage: image_storage.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            image_storage: image_storage.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_storage: image_storage.clone(),
            authorizer: authorizer.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            image_storage,
            authorizer,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );

        Ok(Self {
            health_api,
            product_api,
        })
    }
}
