use crate::domain::auth::errors::AuthError;
use crate::domain::errors::{RepositoryError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.missing_fields")]
    MissingFields,
    #[error("product.image_missing")]
    ImageMissing,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.id_missing")]
    IdMissing,
    #[error("product.invalid_id")]
    InvalidId,
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
    #[error("storage.failure")]
    Storage(#[from] StorageError),
}

impl ProductError {
    /// Maps a repository lookup failure, keeping `NotFound` as a product error.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}
