use async_trait::async_trait;

use super::errors::AuthError;
use super::model::Identity;

/// Service port for resolving a raw `Authorization` credential into an identity.
///
/// Implementations return `AuthError::Unauthenticated` when the credential is
/// rejected and `AuthError::IdentityUnavailable` when the check itself could
/// not be carried out.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Result<Identity, AuthError>;
}
