//! SDK configuration
//!
//! Endpoint, region, and transport settings for a [`crate::Client`].
//! Everything is resolved once at construction; a `Config` is read-only
//! afterwards and safe to share between in-flight calls.

use std::time::Duration;

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("stratus-sdk/", env!("CARGO_PKG_VERSION"));

/// Page size sent for list calls when the caller leaves `max_keys` unset.
pub const DEFAULT_PAGE_LIMIT: u32 = 1000;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit endpoint override. When unset, the endpoint is derived
    /// from the region.
    pub endpoint: Option<String>,
    /// Region the derived endpoint targets.
    pub region: String,
    /// User agent header value.
    pub user_agent: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Total per-request timeout, including reading the body.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: DEFAULT_REGION.to_string(),
            user_agent: USER_AGENT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Create a configuration for the given region.
    pub fn new(region: &str) -> Self {
        Self {
            region: region.to_string(),
            ..Self::default()
        }
    }

    /// Build a configuration from the environment.
    ///
    /// Reads `STRATUS_ENDPOINT` and `STRATUS_REGION`; unset variables fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var("STRATUS_ENDPOINT") {
            if !endpoint.is_empty() {
                config.endpoint = Some(endpoint);
            }
        }
        if let Ok(region) = std::env::var("STRATUS_REGION") {
            if !region.is_empty() {
                config.region = region;
            }
        }
        config
    }

    /// Override the endpoint. Takes precedence over the region-derived one.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.trim_end_matches('/').to_string());
        self
    }

    /// Override the user agent.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Endpoint actually used (explicit override > region-derived).
    pub fn effective_endpoint(&self) -> String {
        match self.endpoint {
            Some(ref endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://api.{}.stratuscloud.com", self.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_derived_from_region_by_default() {
        let config = Config::new("eu-west-1");
        assert_eq!(config.effective_endpoint(), "https://api.eu-west-1.stratuscloud.com");
    }

    #[test]
    fn explicit_endpoint_wins_over_region() {
        let config = Config::new("eu-west-1").with_endpoint("http://localhost:8080/");
        assert_eq!(config.effective_endpoint(), "http://localhost:8080");
    }
}
