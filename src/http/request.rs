//! Request assembly
//!
//! [`RequestBuilder`] accumulates the pieces of one API call (path, query
//! parameters, headers, body), then signs and executes it. The terminal
//! `send*` methods consume the builder, so a request can only ever be
//! executed once. Body serialization failures are deferred and surfaced by
//! `send` before any network I/O happens.

use crate::auth::SigningRequest;
use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::query::QueryValue;
use crate::http::response::{ApiResponse, REQUEST_ID_HEADER};
use crate::http::transport::sanitize_for_log;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Builder for one outbound API call.
///
/// Created by [`Client::get`], [`Client::post`], [`Client::put`], or
/// [`Client::delete`]; the verb is fixed at construction.
#[must_use = "RequestBuilder does nothing until a send method is called"]
pub struct RequestBuilder<'a> {
    client: &'a Client,
    method: Method,
    path: String,
    params: BTreeMap<String, String>,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    content_type: Option<&'static str>,
    /// Error captured while building, returned by `send` before any I/O.
    build_error: Option<Error>,
}

impl<'a> RequestBuilder<'a> {
    pub(crate) fn new(client: &'a Client, method: Method, path: &str) -> Self {
        Self {
            client,
            method,
            path: normalize_path(path),
            params: BTreeMap::new(),
            headers: Vec::new(),
            body: None,
            content_type: None,
            build_error: None,
        }
    }

    /// Replace the request path. Last call wins.
    pub fn path(mut self, path: &str) -> Self {
        self.path = normalize_path(path);
        self
    }

    /// Add a query parameter unconditionally, even when the value is empty.
    ///
    /// Action markers like `?start` ride on this: `.query("start", "")`.
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    /// Add a query parameter only when the value is non-empty/non-zero.
    ///
    /// This is the guard used throughout the per-resource wrappers to avoid
    /// sending default arguments; see [`QueryValue`] for the filtering rules.
    pub fn query_filter(mut self, name: &str, value: impl QueryValue) -> Self {
        if let Some(value) = value.to_query() {
            self.params.insert(name.to_string(), value);
        }
        self
    }

    /// Add a request header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Serialize `body` to JSON and attach it.
    ///
    /// A serialization failure does not panic and is not silently dropped:
    /// it is stored and returned by the eventual `send`, which then never
    /// touches the transport.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Self {
        if self.build_error.is_some() {
            return self;
        }
        match serde_json::to_vec(body) {
            Ok(bytes) => {
                self.body = Some(bytes);
                self.content_type = Some("application/json");
            }
            Err(e) => self.build_error = Some(Error::Encode(e)),
        }
        self
    }

    /// Attach raw bytes as the request body.
    pub fn raw_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Sign, execute, and classify the call.
    ///
    /// Exactly one of four outcomes per call: a deferred build error, a
    /// transport error, a service error ([`Error::Service`]), or `Ok` with
    /// the response wrapper.
    pub async fn send(self) -> Result<ApiResponse> {
        if let Some(err) = self.build_error {
            return Err(err);
        }

        let mut url = Url::parse(&format!("{}{}", self.client.endpoint(), self.path))?;
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.params {
                pairs.append_pair(name, value);
            }
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let authorization = self.client.signer().authorization(&SigningRequest {
            method: self.method.as_str(),
            path: url.path(),
            query: &self.params,
            timestamp: &timestamp,
        });

        let mut headers = self.headers;
        headers.push(("authorization".to_string(), authorization));
        headers.push(("x-stratus-date".to_string(), timestamp));
        if let Some(content_type) = self.content_type {
            headers.push(("content-type".to_string(), content_type.to_string()));
        }

        let response = self
            .client
            .transport()
            .execute(self.method, url, headers, self.body)
            .await?;

        let status = response.status();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        // The one place the transport stream is drained; a failure mid-read
        // is still a transport error, and the body is released either way.
        let body = response.bytes().await.map_err(Error::Transport)?.to_vec();

        let response = ApiResponse::new(status, request_id, body);
        if response.is_fail() {
            tracing::error!(
                "API error: {} - {}",
                status,
                sanitize_for_log(&String::from_utf8_lossy(response.body()))
            );
            return Err(Error::Service(response.service_error()));
        }

        Ok(response)
    }

    /// Execute and decode the success payload into `T`.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await?;
        response.parse_json_body()
    }

    /// Execute, discarding the success payload. For operations whose
    /// response carries no body.
    pub async fn send_unit(self) -> Result<()> {
        self.send().await.map(|_| ())
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::config::Config;
    use serde::Serializer;

    /// A body that always fails to serialize.
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot serialize"))
        }
    }

    fn client() -> Client {
        // Port 1 is never listening; any test that reached the transport
        // would fail with a transport error instead of the expected one.
        let config = Config::default().with_endpoint("http://127.0.0.1:1");
        Client::new(config, Credentials::new("ak", "sk")).unwrap()
    }

    #[test]
    fn query_filter_omits_empty_and_zero() {
        let client = client();
        let builder = client
            .get("/v2/instance")
            .query_filter("marker", "")
            .query_filter("maxKeys", 0u32)
            .query_filter("zoneName", "zone-a");
        assert_eq!(builder.params.len(), 1);
        assert_eq!(builder.params.get("zoneName").map(String::as_str), Some("zone-a"));
    }

    #[test]
    fn query_keeps_empty_values() {
        let client = client();
        let builder = client.put("/v2/instance/i-001").query("start", "");
        assert_eq!(builder.params.get("start").map(String::as_str), Some(""));
    }

    #[test]
    fn path_last_call_wins() {
        let client = client();
        let builder = client.get("/v2/instance").path("/v2/other");
        assert_eq!(builder.path, "/v2/other");
    }

    #[test]
    fn relative_paths_gain_leading_slash() {
        let client = client();
        let builder = client.get("v2/instance");
        assert_eq!(builder.path, "/v2/instance");
    }

    #[tokio::test]
    async fn unserializable_body_fails_before_transport() {
        let client = client();
        let err = client
            .post("/v2/instance")
            .json_body(&Unserializable)
            .send()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }
}
