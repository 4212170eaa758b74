//! Request signing
//!
//! Every outbound call carries an `Authorization` header computed from the
//! client's key material. [`Signer`] is the seam: the client holds a boxed
//! signer and applies it right before send, so tests and alternative auth
//! backends can substitute their own implementation.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

/// Version tag leading every authorization header.
pub const AUTH_VERSION: &str = "stratus-auth-v1";

/// The pieces of a request that participate in signing.
///
/// Query parameters arrive as a sorted map, so the canonical form is
/// independent of the order call sites added them in.
pub struct SigningRequest<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub query: &'a BTreeMap<String, String>,
    /// UTC timestamp the header is stamped with, `%Y-%m-%dT%H:%M:%SZ`.
    pub timestamp: &'a str,
}

/// Computes the `Authorization` header for one outbound request.
pub trait Signer: Send + Sync {
    fn authorization(&self, request: &SigningRequest<'_>) -> String;
}

/// Access/secret key pair for the platform's v1 signing convention.
#[derive(Clone)]
pub struct Credentials {
    pub access_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(access_key: &str, secret_key: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    /// Read credentials from `STRATUS_ACCESS_KEY_ID` and
    /// `STRATUS_SECRET_ACCESS_KEY`. Returns `None` when either is missing
    /// or empty.
    pub fn from_env() -> Option<Self> {
        let access_key = std::env::var("STRATUS_ACCESS_KEY_ID").ok()?;
        let secret_key = std::env::var("STRATUS_SECRET_ACCESS_KEY").ok()?;
        if access_key.is_empty() || secret_key.is_empty() {
            return None;
        }
        Some(Self { access_key, secret_key })
    }
}

// Security: never let the secret key reach logs through Debug formatting.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Signer for Credentials {
    fn authorization(&self, request: &SigningRequest<'_>) -> String {
        let canonical = canonical_request(request);
        let mut hasher = Sha256::new();
        hasher.update(self.secret_key.as_bytes());
        hasher.update(b"\n");
        hasher.update(canonical.as_bytes());
        let signature = hex::encode(hasher.finalize());
        format!("{}/{}/{}/{}", AUTH_VERSION, self.access_key, request.timestamp, signature)
    }
}

/// Canonical string: method, path, sorted percent-encoded query pairs,
/// timestamp, one per line.
fn canonical_request(request: &SigningRequest<'_>) -> String {
    let query = request
        .query
        .iter()
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}\n{}\n{}\n{}", request.method, request.path, query, request.timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(query: &'a BTreeMap<String, String>) -> SigningRequest<'a> {
        SigningRequest {
            method: "GET",
            path: "/v2/instance",
            query,
            timestamp: "2024-01-01T00:00:00Z",
        }
    }

    #[test]
    fn signing_is_deterministic() {
        let creds = Credentials::new("ak", "sk");
        let query = BTreeMap::new();
        assert_eq!(creds.authorization(&request(&query)), creds.authorization(&request(&query)));
    }

    #[test]
    fn signature_depends_on_secret() {
        let query = BTreeMap::new();
        let a = Credentials::new("ak", "secret-a").authorization(&request(&query));
        let b = Credentials::new("ak", "secret-b").authorization(&request(&query));
        assert_ne!(a, b);
    }

    #[test]
    fn header_carries_version_access_key_and_timestamp() {
        let query = BTreeMap::new();
        let header = Credentials::new("my-access-key", "sk").authorization(&request(&query));
        let parts: Vec<&str> = header.split('/').collect();
        assert_eq!(parts[0], AUTH_VERSION);
        assert_eq!(parts[1], "my-access-key");
        assert_eq!(parts[2], "2024-01-01T00:00:00Z");
        assert_eq!(parts[3].len(), 64);
    }

    #[test]
    fn canonical_query_is_percent_encoded() {
        let mut query = BTreeMap::new();
        query.insert("name".to_string(), "a b&c".to_string());
        let canonical = canonical_request(&request(&query));
        assert!(canonical.contains("name=a%20b%26c"));
    }

    #[test]
    fn debug_output_redacts_secret() {
        let creds = Credentials::new("ak", "very-secret");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("ak"));
    }
}
