//! TTL response cache for provider requests.
//!
//! [`ResponseCache`] maps a canonical request URL to the decoded JSON
//! payload a previous fetch produced for it. An entry is servable only
//! while younger than the TTL (10 minutes by default); a stale entry is
//! simply a miss and gets overwritten by the next successful fetch for the
//! same URL.
//!
//! # Architecture
//!
//! The cache sits in [`FetchGateway`](crate::FetchGateway), in front of
//! both the direct dispatch path and the rate-limited queue. A cache hit
//! returns before any routing decision is made — no network call, no queue
//! slot, no side effects beyond the hit metric. Only successful payloads
//! are ever inserted; transport, HTTP, and embedded provider errors are
//! never cached, so a failing endpoint is retried on every call.
//!
//! Random-item endpoints bypass the cache entirely (neither read nor
//! written) — see the `bypass_cache` flag on
//! [`RequestSpec`](crate::RequestSpec).

use std::time::Duration;

use moka::future::Cache;
use serde_json::Value;

use crate::telemetry;

/// Default time-to-live for cached responses.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Default maximum number of cached entries.
///
/// The key space is bounded by the number of distinct request URLs issued
/// in a session, which stays far below this in practice; the bound exists
/// so a long-lived process cannot grow without limit.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 10_000;

/// Configuration for the response cache.
///
/// ```rust
/// # use metafetch::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(1_000)
///     .ttl(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached entries. Default: 10,000.
    pub max_entries: u64,
    /// Time-to-live for cached entries. Default: 10 minutes.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl CacheConfig {
    /// Create a new config with the default TTL and capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of cached entries.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    /// Set the time-to-live for cached entries.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// In-memory TTL cache of decoded provider responses, keyed by URL.
///
/// Uses moka's async-friendly LRU + TTL cache. Lookups and insertions do
/// no I/O and cannot fail.
pub struct ResponseCache {
    cache: Cache<String, Value>,
}

impl ResponseCache {
    /// Create a new response cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();
        Self { cache }
    }

    /// Look up the cached payload for a URL.
    ///
    /// Returns `None` if the URL was never fetched or its entry has aged
    /// past the TTL. Emits cache hit/miss metrics. No side effect on miss.
    pub async fn get(&self, url: &str) -> Option<Value> {
        match self.cache.get(url).await {
            Some(value) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                Some(value)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                None
            }
        }
    }

    /// Insert (or overwrite) the payload for a URL, stamped now.
    pub async fn insert(&self, url: &str, payload: Value) {
        self.cache.insert(url.to_owned(), payload).await;
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
