/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
}

/// Image storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.not_found")]
    NotFound,
    #[error("storage.write_failed")]
    WriteFailed(#[source] std::io::Error),
    #[error("storage.read_failed")]
    ReadFailed(#[source] std::io::Error),
    #[error("storage.delete_failed")]
    DeleteFailed(#[source] std::io::Error),
}
