//! Builder for configuring gateway instances

use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheConfig, ResponseCache};
use crate::providers::{ProviderEndpoints, ProviderKeys};
use crate::settings::Settings;
use crate::transport::{HttpTransport, Transport};
use crate::{FetchGateway, Result};

use super::queue::{DEFAULT_REQUEST_SPACING, DispatchQueue};
use super::routing::RateLimitPolicy;

/// Response language used for providers that localize (TMDB) when no
/// settings or explicit language is supplied.
const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Main entry point for creating gateway instances.
pub struct Metafetch;

impl Metafetch {
    /// Create a new builder for configuring the gateway.
    pub fn builder() -> MetafetchBuilder {
        MetafetchBuilder::new()
    }
}

/// Builder for configuring gateway instances.
pub struct MetafetchBuilder {
    keys: ProviderKeys,
    endpoints: ProviderEndpoints,
    language: String,
    cache: CacheConfig,
    request_spacing: Duration,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl MetafetchBuilder {
    pub fn new() -> Self {
        Self {
            keys: ProviderKeys::default(),
            endpoints: ProviderEndpoints::default(),
            language: DEFAULT_LANGUAGE.to_owned(),
            cache: CacheConfig::default(),
            request_spacing: DEFAULT_REQUEST_SPACING,
            timeout: None,
            transport: None,
        }
    }

    /// Set the TMDB API key.
    pub fn tmdb_key(mut self, key: impl Into<String>) -> Self {
        self.keys.tmdb = key.into();
        self
    }

    /// Set the Comic Vine API key.
    pub fn comic_vine_key(mut self, key: impl Into<String>) -> Self {
        self.keys.comic_vine = key.into();
        self
    }

    /// Set the Giant Bomb API key.
    pub fn giant_bomb_key(mut self, key: impl Into<String>) -> Self {
        self.keys.giant_bomb = key.into();
        self
    }

    /// Replace all provider keys at once.
    pub fn keys(mut self, keys: ProviderKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Read provider keys from the environment
    /// (`TMDB_API_KEY`, `COMIC_VINE_API_KEY`, `GIANT_BOMB_API_KEY`).
    pub fn keys_from_env(mut self) -> Self {
        self.keys = ProviderKeys::from_env();
        self
    }

    /// Set the response language for providers that localize.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Take the response language from the user's settings.
    pub fn settings(mut self, settings: &Settings) -> Self {
        self.language = settings.request_language().to_owned();
        self
    }

    /// Override provider base URLs (tests aim these at a mock server).
    pub fn endpoints(mut self, endpoints: ProviderEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Configure the response cache (TTL, capacity).
    pub fn response_cache(mut self, config: CacheConfig) -> Self {
        self.cache = config;
        self
    }

    /// Override the gap enforced between consecutive rate-limited
    /// requests. Default: [`DEFAULT_REQUEST_SPACING`].
    pub fn request_spacing(mut self, spacing: Duration) -> Self {
        self.request_spacing = spacing;
        self
    }

    /// Set a request timeout on the HTTP client. Off by default — a hung
    /// request then hangs its caller, matching the historical behavior.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Inject a custom transport (tests). When set, `timeout` is ignored.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the gateway.
    ///
    /// Spawns the dispatch-queue worker, so this must run inside a tokio
    /// runtime context.
    pub fn build(self) -> Result<FetchGateway> {
        let policy = RateLimitPolicy::from_bases(&[&self.endpoints.jikan])?;

        let transport = self.transport.unwrap_or_else(|| match self.timeout {
            Some(timeout) => Arc::new(HttpTransport::with_timeout(timeout)),
            None => Arc::new(HttpTransport::new()),
        });

        let cache = ResponseCache::new(&self.cache);
        let queue = DispatchQueue::new(transport.clone(), self.request_spacing);

        Ok(FetchGateway {
            transport,
            cache,
            queue,
            policy,
            endpoints: self.endpoints,
            keys: self.keys,
            language: self.language,
        })
    }
}

impl Default for MetafetchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
