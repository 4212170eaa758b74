//! HTTP transport for Stratus REST API calls
//!
//! Thin wrapper over `reqwest`: user agent, timeouts, and request logging.
//! Retries, pooling, and TLS all live in the underlying client; nothing in
//! the SDK re-implements them.

use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::{Client, Method, Url};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize a response body for logging.
/// Truncates long bodies and strips non-printable characters.
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper shared by all calls through one [`crate::Client`].
#[derive(Clone)]
pub(crate) struct Transport {
    client: Client,
}

impl Transport {
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Send one assembled request and hand back the raw response.
    /// Transport failures surface here; status classification is the
    /// caller's job.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: Vec<(String, String)>,
        body: Option<Vec<u8>>,
    ) -> Result<reqwest::Response> {
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        request.send().await.map_err(Error::Transport)
    }
}
