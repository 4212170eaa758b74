//! Stratus client
//!
//! [`Client`] bundles configuration, credentials, and the HTTP transport.
//! It is read-only after construction and `Clone`, so callers can issue
//! any number of concurrent calls from one instance; each call gets its
//! own builder and response.

use crate::auth::{Credentials, Signer};
use crate::config::Config;
use crate::error::Result;
use crate::http::transport::Transport;
use crate::http::RequestBuilder;
use reqwest::Method;
use std::sync::Arc;
use uuid::Uuid;

/// Main entry point for the SDK.
#[derive(Clone)]
pub struct Client {
    endpoint: String,
    region: String,
    signer: Arc<dyn Signer>,
    transport: Transport,
}

impl Client {
    /// Create a client from a configuration and an access/secret key pair.
    pub fn new(config: Config, credentials: Credentials) -> Result<Self> {
        Self::with_signer(config, Arc::new(credentials))
    }

    /// Create a client with a custom [`Signer`] implementation.
    pub fn with_signer(config: Config, signer: Arc<dyn Signer>) -> Result<Self> {
        let transport = Transport::new(&config)?;

        Ok(Self {
            endpoint: config.effective_endpoint(),
            region: config.region,
            signer,
            transport,
        })
    }

    /// Endpoint every request path is appended to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Region this client targets.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Start a GET request.
    pub fn get(&self, path: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::GET, path)
    }

    /// Start a POST request.
    pub fn post(&self, path: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::POST, path)
    }

    /// Start a PUT request.
    pub fn put(&self, path: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::PUT, path)
    }

    /// Start a DELETE request.
    pub fn delete(&self, path: &str) -> RequestBuilder<'_> {
        RequestBuilder::new(self, Method::DELETE, path)
    }

    pub(crate) fn signer(&self) -> &dyn Signer {
        self.signer.as_ref()
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }
}

/// Generate a fresh idempotency token for a mutating call.
///
/// The SDK forwards client tokens opaquely and never generates one on its
/// own; callers that want idempotent retries mint a token here and reuse
/// it across attempts.
pub fn new_client_token() -> String {
    Uuid::new_v4().to_string()
}
