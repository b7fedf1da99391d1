use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

/// Shared HTTP client configuration for the identity service.
pub struct IdentityClient {
    pub client: Client,
    pub whoami_url: String,
}

impl IdentityClient {
    pub fn new(whoami_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build identity HTTP client")?;

        Ok(Self { client, whoami_url })
    }
}
