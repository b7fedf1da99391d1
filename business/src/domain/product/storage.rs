use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// An image received from a client, not yet stored.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// File name as sent by the client; only its extension is kept.
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// Port for persisting product images.
///
/// Stored images are addressed by the path string returned from `store`.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn store(&self, upload: &ImageUpload) -> Result<String, StorageError>;
    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError>;
    async fn remove(&self, path: &str) -> Result<(), StorageError>;
}
