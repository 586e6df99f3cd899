//! HTTP transport seam.
//!
//! [`Transport`] is the boundary between the gateway's cache/queue/routing
//! logic and the network: execute one described request, return the decoded
//! JSON body or a classified [`FetchError`]. [`HttpTransport`] is the
//! reqwest-backed implementation; tests substitute mock transports to drive
//! queue timing and failure paths deterministically.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::error;

use crate::types::RequestSpec;
use crate::{FetchError, Result};

/// Identifying client header sent with every outbound request.
pub const USER_AGENT: &str = concat!("metafetch/", env!("CARGO_PKG_VERSION"));

/// Executes a single described HTTP request.
///
/// Implementations classify faults into [`FetchError`] but perform no
/// caching, queuing, or body screening — that is the gateway's job.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and decode the response body as JSON.
    async fn execute(&self, spec: &RequestSpec) -> Result<Value>;
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Create a transport with no request timeout (the baseline behavior —
    /// callers that want one use [`with_timeout`](Self::with_timeout)).
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Create a transport that aborts requests after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, spec: &RequestSpec) -> Result<Value> {
        let method = spec.options.method.clone().unwrap_or(Method::GET);

        let mut request = self
            .http
            .request(method, &spec.url)
            .header("User-Agent", USER_AGENT);
        for (name, value) in &spec.options.headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(|e| {
            error!(url = %spec.url, error = %e, "request transport error");
            FetchError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            // The body often carries the provider's explanation; keep it in
            // the log, not in the caller-facing message.
            let body = response.text().await.unwrap_or_default();
            error!(
                url = %spec.url,
                status = status.as_u16(),
                body = %body,
                "HTTP error response"
            );
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
