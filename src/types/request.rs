//! Request descriptions handed to the gateway and transport.

use reqwest::Method;

/// Optional overrides for a single request.
///
/// The defaults (GET, no extra headers) cover every provider call the
/// gateway itself plans; callers going through
/// [`MediaSource::fetch`](crate::MediaSource::fetch) can override both.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method override. `None` means GET.
    pub method: Option<Method>,
    /// Extra headers, appended after the gateway's identifying headers.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A fully described request: target URL, overrides, and whether the
/// response cache must be skipped for this call.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub url: String,
    pub options: RequestOptions,
    pub bypass_cache: bool,
}

impl RequestSpec {
    /// A plain GET request with default options and caching enabled.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: RequestOptions::default(),
            bypass_cache: false,
        }
    }
}

/// Output of a provider URL builder: the request URL plus whether this
/// particular endpoint must bypass the cache (random-item endpoints, where
/// repeated identical URLs must not return identical results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRequest {
    pub url: String,
    pub bypass_cache: bool,
}

impl PlannedRequest {
    /// A cacheable planned request.
    pub fn cached(url: String) -> Self {
        Self {
            url,
            bypass_cache: false,
        }
    }

    /// A planned request that must skip the cache.
    pub fn uncached(url: String) -> Self {
        Self {
            url,
            bypass_cache: true,
        }
    }
}
