use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use business::domain::errors::StorageError;
use business::domain::product::storage::{ImageStorage, ImageUpload};

use super::naming::stored_file_name;

const MAX_NAME_ATTEMPTS: i64 = 1000;

/// Stores product images as plain files under a single upload directory.
pub struct ImageStorageFs {
    upload_dir: PathBuf,
}

impl ImageStorageFs {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_upload_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(StorageError::WriteFailed)
    }

    async fn write_new(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;

        if let Err(e) = file.write_all(bytes).await {
            let _ = fs::remove_file(path).await;
            return Err(e);
        }
        file.flush().await
    }
}

#[async_trait]
impl ImageStorage for ImageStorageFs {
    async fn store(&self, upload: &ImageUpload) -> Result<String, StorageError> {
        let timestamp = Utc::now().timestamp_millis();

        // Two uploads in the same millisecond get consecutive timestamps.
        for offset in 0..MAX_NAME_ATTEMPTS {
            let name = stored_file_name(timestamp + offset, upload.file_name.as_deref());
            let path = self.upload_dir.join(name);

            match self.write_new(&path, &upload.bytes).await {
                Ok(()) => {
                    let stored = path.to_string_lossy().into_owned();
                    tracing::debug!(path = %stored, size = upload.bytes.len(), "Stored image");
                    return Ok(stored);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(StorageError::WriteFailed(e)),
            }
        }

        Err(StorageError::WriteFailed(std::io::Error::new(
            ErrorKind::AlreadyExists,
            "no free image name",
        )))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::ReadFailed(e),
        })
    }

    async fn remove(&self, path: &str) -> Result<(), StorageError> {
        fs::remove_file(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::DeleteFailed(e),
        })
    }
}
