use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_token(&self, token: &str) -> Result<User, RepositoryError>;
}
