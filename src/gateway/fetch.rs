//! FetchGateway — the public entry point for provider requests.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::error;

use crate::cache::ResponseCache;
use crate::providers::{ProviderEndpoints, ProviderKeys};
use crate::telemetry;
use crate::transport::Transport;
use crate::types::{FetchOutcome, RequestOptions, RequestSpec};
use crate::{FetchError, Result};

use super::queue::DispatchQueue;
use super::routing::RateLimitPolicy;

/// The metadata-fetch gateway.
///
/// Owns the response cache, the rate-limited dispatch queue, the routing
/// policy, and the HTTP transport. Construct one per process (or per test)
/// via [`Metafetch::builder()`](crate::Metafetch::builder); there is no
/// global instance.
///
/// Every public operation resolves with a [`FetchOutcome`] — a success
/// payload or the uniform `{error: true, message}` shape — and never
/// returns an error or panics, whatever the fault.
pub struct FetchGateway {
    pub(super) transport: Arc<dyn Transport>,
    pub(super) cache: ResponseCache,
    pub(super) queue: DispatchQueue,
    pub(super) policy: RateLimitPolicy,
    pub(super) endpoints: ProviderEndpoints,
    pub(super) keys: ProviderKeys,
    pub(super) language: String,
}

impl FetchGateway {
    /// Fetch a URL through the cache/queue/normalization pipeline.
    ///
    /// With `bypass_cache` set, the cache is neither read nor written for
    /// this call — used by random-item endpoints where a repeated URL must
    /// not return the same payload.
    pub async fn fetch(
        &self,
        url: &str,
        options: RequestOptions,
        bypass_cache: bool,
    ) -> FetchOutcome {
        self.fetch_value(RequestSpec {
            url: url.to_owned(),
            options,
            bypass_cache,
        })
        .await
        .into()
    }

    /// The fallible core of [`fetch`](Self::fetch), shared with the
    /// multi-step media operations that need to branch on faults.
    pub(super) async fn fetch_value(&self, spec: RequestSpec) -> Result<Value> {
        if !spec.bypass_cache
            && let Some(hit) = self.cache.get(&spec.url).await
        {
            return Ok(hit);
        }

        let host = host_label(&spec.url);
        let url = spec.url.clone();
        let bypass_cache = spec.bypass_cache;

        let started = Instant::now();
        let result = if self.policy.is_rate_limited(&spec.url) {
            self.queue.submit(spec).await
        } else {
            self.transport.execute(&spec).await
        };
        let result = result.and_then(vet_payload);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS, "host" => host.clone())
            .record(started.elapsed().as_secs_f64());

        match result {
            Ok(value) => {
                metrics::counter!(telemetry::REQUESTS_TOTAL, "host" => host, "status" => "ok")
                    .increment(1);
                if !bypass_cache {
                    self.cache.insert(&url, value.clone()).await;
                }
                Ok(value)
            }
            Err(err) => {
                metrics::counter!(telemetry::REQUESTS_TOTAL, "host" => host, "status" => "error")
                    .increment(1);
                Err(err)
            }
        }
    }
}

/// Screen a decoded 2xx body for the providers' embedded error convention:
/// an `error` field whose value is anything but the literal `"OK"`
/// (case-insensitively) marks an application-level failure.
fn vet_payload(value: Value) -> Result<Value> {
    let embedded = match value.get("error") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if text.eq_ignore_ascii_case("OK") => None,
        Some(Value::String(text)) => Some(text.clone()),
        // Non-string error markers have no agreed meaning; surface their
        // JSON rendering rather than guessing.
        Some(other) => Some(other.to_string()),
    };
    match embedded {
        None => Ok(value),
        Some(text) => {
            error!(provider_error = %text, "provider reported an application-level error");
            Err(FetchError::Provider(text))
        }
    }
}

fn host_label(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| "invalid".to_owned())
}
