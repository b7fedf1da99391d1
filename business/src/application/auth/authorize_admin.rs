use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::IdentityVerifier;
use crate::domain::auth::use_cases::authorize_admin::{
    AuthorizeAdminParams, AuthorizeAdminUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;

pub struct AuthorizeAdminUseCaseImpl {
    pub verifier: Arc<dyn IdentityVerifier>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthorizeAdminUseCase for AuthorizeAdminUseCaseImpl {
    async fn execute(&self, params: AuthorizeAdminParams) -> Result<User, AuthError> {
        if params.credential.trim().is_empty() {
            return Err(AuthError::Unauthenticated);
        }

        let identity = self.verifier.verify(&params.credential).await?;

        // A token the identity service accepts but we have no user for is
        // treated the same as a rejected credential.
        let user = self
            .user_repository
            .get_by_token(&identity.token)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AuthError::Unauthenticated,
                other => {
                    self.logger
                        .error(&format!("User lookup failed: {}", other));
                    AuthError::IdentityUnavailable
                }
            })?;

        if !user.is_admin() {
            self.logger.warn("Rejected mutating request from non-admin user");
            return Err(AuthError::Forbidden);
        }

        Ok(user)
    }
}
