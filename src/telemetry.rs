//! Telemetry metric name constants.
//!
//! Centralised metric names for metafetch operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `metafetch_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `host` — target host of the request (e.g. "api.jikan.moe")
//! - `status` — outcome: "ok" or "error"

/// Total requests dispatched through the gateway (network calls only;
/// cache hits are counted separately).
///
/// Labels: `host`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "metafetch_requests_total";

/// Request duration in seconds, measured around the network call
/// (including queue wait for rate-limited requests).
///
/// Labels: `host`.
pub const REQUEST_DURATION_SECONDS: &str = "metafetch_request_duration_seconds";

/// Total response-cache hits.
pub const CACHE_HITS_TOTAL: &str = "metafetch_cache_hits_total";

/// Total response-cache misses.
pub const CACHE_MISSES_TOTAL: &str = "metafetch_cache_misses_total";

/// Requests currently waiting in (or being served by) the dispatch queue.
pub const QUEUE_DEPTH: &str = "metafetch_queue_depth";

/// Time a queued request spent waiting before its network call started.
pub const QUEUE_WAIT_SECONDS: &str = "metafetch_queue_wait_seconds";
