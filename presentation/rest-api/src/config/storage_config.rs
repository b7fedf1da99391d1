use std::env;
use std::path::PathBuf;

/// Image storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - UPLOAD_DIR: directory for uploaded images (default: "uploads")
    pub fn from_env() -> Self {
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        Self {
            upload_dir: PathBuf::from(upload_dir),
        }
    }
}
