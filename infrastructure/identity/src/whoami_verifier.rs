use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::Deserialize;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::Identity;
use business::domain::auth::services::IdentityVerifier;

use crate::client::IdentityClient;

#[derive(Deserialize)]
struct WhoAmIResponse {
    token: String,
}

/// Verifies credentials by forwarding them to the whoami endpoint.
///
/// Any non-success status means the credential was rejected.
pub struct WhoAmIVerifier {
    client: IdentityClient,
}

impl WhoAmIVerifier {
    pub fn new(client: IdentityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityVerifier for WhoAmIVerifier {
    async fn verify(&self, credential: &str) -> Result<Identity, AuthError> {
        let header = HeaderValue::from_str(credential).map_err(|_| AuthError::Unauthenticated)?;

        let response = self
            .client
            .client
            .get(&self.client.whoami_url)
            .header(AUTHORIZATION, header)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity service request failed: {e}");
                AuthError::IdentityUnavailable
            })?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Identity service rejected credential");
            return Err(AuthError::Unauthenticated);
        }

        let data: WhoAmIResponse = response.json().await.map_err(|e| {
            tracing::error!("Identity service returned an unexpected body: {e}");
            AuthError::IdentityUnavailable
        })?;

        if data.token.is_empty() {
            return Err(AuthError::Unauthenticated);
        }

        Ok(Identity { token: data.token })
    }
}
