use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::model::User;

pub struct AuthorizeAdminParams {
    pub credential: String,
}

#[async_trait]
pub trait AuthorizeAdminUseCase: Send + Sync {
    async fn execute(&self, params: AuthorizeAdminParams) -> Result<User, AuthError>;
}
