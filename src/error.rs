//! Error types for the Stratus SDK
//!
//! Every API call resolves to exactly one of four outcomes: a request that
//! could not be assembled, a transport failure, a service-reported failure,
//! or a success payload that did not decode. Callers branch on the variant;
//! the SDK never retries or swallows any of them.

use thiserror::Error;

/// Convenience alias used throughout the SDK.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by SDK calls.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request body could not be serialized to JSON. Surfaced before
    /// the transport is touched.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request URL could not be assembled from the endpoint and path.
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The call never completed: connection, DNS, or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint understood the request and rejected it.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A success response body did not match the expected JSON shape.
    /// Indicates a contract mismatch between client and server versions.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Returns the structured service error, if this is one.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            Error::Service(e) => Some(e),
            _ => None,
        }
    }
}

/// A failure reported by the remote endpoint.
///
/// Carries the machine-readable code and human message from the error
/// payload. The SDK does not interpret codes itself; callers branch on
/// [`ServiceError::code`] (e.g. `"NoSuchObject"` vs `"Conflict"`).
#[derive(Debug, Clone)]
pub struct ServiceError {
    /// Machine-readable error code from the failure payload.
    pub code: String,
    /// Human-readable message from the failure payload.
    pub message: String,
    /// Request id echoed by the service, when present.
    pub request_id: Option<String>,
    /// HTTP status the failure arrived with.
    pub status: u16,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "service error {} (status {}): {}", self.code, self.status, self.message)?;
        if let Some(ref id) = self.request_id {
            write!(f, " [request id {}]", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_display_includes_code_and_status() {
        let err = ServiceError {
            code: "NoSuchObject".to_string(),
            message: "not found".to_string(),
            request_id: None,
            status: 404,
        };
        let text = err.to_string();
        assert!(text.contains("NoSuchObject"));
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn service_error_display_includes_request_id_when_present() {
        let err = ServiceError {
            code: "InternalError".to_string(),
            message: "boom".to_string(),
            request_id: Some("req-123".to_string()),
            status: 500,
        };
        assert!(err.to_string().contains("req-123"));
    }

    #[test]
    fn as_service_error_only_matches_service_variant() {
        let service = Error::Service(ServiceError {
            code: "Conflict".to_string(),
            message: "in use".to_string(),
            request_id: None,
            status: 409,
        });
        assert!(service.as_service_error().is_some());

        let url = Error::Url("not a url".parse::<url::Url>().unwrap_err());
        assert!(url.as_service_error().is_none());
    }
}
