//! Response classification
//!
//! [`ApiResponse`] owns the buffered body of one completed call and splits
//! the world in two: service-reported failures (non-2xx with a structured
//! error payload) and successes whose body decodes on demand. Transport
//! failures never reach this type.

use crate::error::{Error, Result, ServiceError};
use crate::http::transport::sanitize_for_log;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Header the service echoes its request id in.
pub const REQUEST_ID_HEADER: &str = "x-stratus-request-id";

/// Wire shape of a failure payload.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    code: Option<String>,
    message: Option<String>,
    #[serde(rename = "requestId")]
    request_id: Option<String>,
}

/// The classified result of one executed request.
///
/// The transport stream is drained exactly once, at construction; from
/// then on the body is plain bytes released by drop on every exit path.
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    request_id: Option<String>,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, request_id: Option<String>, body: Vec<u8>) -> Self {
        Self { status, request_id, body }
    }

    /// HTTP status the call completed with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Request id from the response headers, when the service sent one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// True iff the service rejected the request (non-2xx status).
    pub fn is_fail(&self) -> bool {
        !self.status.is_success()
    }

    /// Build the structured error from a failure payload.
    ///
    /// Only meaningful when [`is_fail`](Self::is_fail) is true. Bodies that
    /// are not the structured shape (proxies, HTML error pages) fall back
    /// to a code synthesized from the status line.
    pub fn service_error(&self) -> ServiceError {
        let payload: Option<ErrorPayload> = serde_json::from_slice(&self.body).ok();
        let (code, message, request_id) = match payload {
            Some(p) => (p.code, p.message, p.request_id),
            None => (None, None, None),
        };

        ServiceError {
            code: code.unwrap_or_else(|| {
                self.status
                    .canonical_reason()
                    .unwrap_or("UnknownError")
                    .replace(' ', "")
            }),
            message: message
                .unwrap_or_else(|| sanitize_for_log(&String::from_utf8_lossy(&self.body))),
            request_id: request_id.or_else(|| self.request_id.clone()),
            status: self.status.as_u16(),
        }
    }

    /// Decode the success payload into `T`.
    ///
    /// Only meaningful when [`is_fail`](Self::is_fail) is false. A body
    /// that does not match `T` is a [`Error::Decode`], distinct from a
    /// service error.
    pub fn parse_json_body<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::Decode)
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the response, taking ownership of the body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}
