//! Telemetry tests using the metrics debugging recorder.

use metafetch::cache::{CacheConfig, ResponseCache};
use serde_json::json;

/// Without a recorder installed, all metric calls must be no-ops.
#[tokio::test]
async fn metrics_emitted_without_panic() {
    let cache = ResponseCache::new(&CacheConfig::default());

    cache.get("https://api.jikan.moe/v4/top/anime").await; // miss
    cache
        .insert("https://api.jikan.moe/v4/top/anime", json!({"data": []}))
        .await;
    cache.get("https://api.jikan.moe/v4/top/anime").await; // hit
}

/// Runs async cache operations within a local recorder scope.
///
/// Uses `block_in_place` + `block_on` pattern to keep `with_local_recorder`
/// on the same thread (it's a thread-local recorder).
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn cache_hit_and_miss_counters() {
    use metrics_util::MetricKind;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let cache = ResponseCache::new(&CacheConfig::default());
                let url = "https://api.jikan.moe/v4/anime?q=naruto";

                // Miss
                cache.get(url).await;

                // Insert + hit
                cache.insert(url, json!({"data": []})).await;
                cache.get(url).await;
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();

    let counter_sum = |name: &str| -> u64 {
        snapshot
            .iter()
            .filter(|(key, _, _, _)| {
                key.kind() == MetricKind::Counter && key.key().name() == name
            })
            .map(|(_, _, _, val)| match val {
                DebugValue::Counter(c) => *c,
                _ => 0,
            })
            .sum()
    };

    assert_eq!(
        counter_sum(metafetch::telemetry::CACHE_MISSES_TOTAL),
        1,
        "expected 1 cache miss"
    );
    assert_eq!(
        counter_sum(metafetch::telemetry::CACHE_HITS_TOTAL),
        1,
        "expected 1 cache hit"
    );
}
