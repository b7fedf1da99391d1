use std::env;
use std::time::Duration;

const DEFAULT_WHOAMI_URL: &str = "http://localhost:3000/whoami";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Identity service configuration
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub whoami_url: String,
    pub timeout: Duration,
}

impl IdentityConfig {
    /// Environment variables:
    /// - WHOAMI_URL: identity endpoint (default: "http://localhost:3000/whoami")
    /// - IDENTITY_TIMEOUT_SECS: request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let whoami_url = env::var("WHOAMI_URL").unwrap_or_else(|_| DEFAULT_WHOAMI_URL.to_string());
        let timeout = parse_timeout(env::var("IDENTITY_TIMEOUT_SECS").ok().as_deref());

        Self {
            whoami_url,
            timeout,
        }
    }
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
