//! Wiremock tests for the fetch pipeline: caching, bypass, routing, and
//! the uniform error shape.

use std::time::{Duration, Instant};

use metafetch::{CacheConfig, Metafetch, ProviderEndpoints, RequestOptions};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn anime_url(server: &MockServer) -> String {
    format!("{}/v4/anime?q=naruto", server.uri())
}

#[tokio::test]
async fn success_returns_decoded_payload() {
    let server = MockServer::start().await;
    let payload = json!({"data": [{"mal_id": 20, "title": "Naruto"}]});

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .and(header("User-Agent", metafetch::transport::USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();
    let outcome = gateway
        .fetch(&anime_url(&server), RequestOptions::default(), false)
        .await;

    assert_eq!(outcome.payload(), Some(&payload));
}

#[tokio::test]
async fn custom_headers_are_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .and(header("x-trace", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();
    let options = RequestOptions::new().header("x-trace", "abc123");
    let outcome = gateway.fetch(&anime_url(&server), options, false).await;

    assert!(!outcome.is_error());
}

// =========================================================================
// Cache behavior
// =========================================================================

#[tokio::test]
async fn second_call_is_served_from_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [1]})))
        .expect(1) // the second call must not reach the network
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();
    let url = anime_url(&server);

    let first = gateway.fetch(&url, RequestOptions::default(), false).await;
    let second = gateway.fetch(&url, RequestOptions::default(), false).await;

    assert_eq!(first, second);
    assert!(!second.is_error());
}

#[tokio::test]
async fn cached_payload_survives_upstream_outage() {
    let server = MockServer::start().await;
    let url = anime_url(&server);

    // The upstream answers once, then starts failing.
    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [1]})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();

    let first = gateway.fetch(&url, RequestOptions::default(), false).await;
    assert!(!first.is_error());

    // Within the TTL, the outage is invisible.
    let second = gateway.fetch(&url, RequestOptions::default(), false).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn expired_entry_goes_back_to_the_network() {
    let server = MockServer::start().await;
    let url = anime_url(&server);

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&server)
        .await;

    let gateway = Metafetch::builder()
        .response_cache(CacheConfig::new().ttl(Duration::from_millis(50)))
        .build()
        .unwrap();

    gateway.fetch(&url, RequestOptions::default(), false).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    let outcome = gateway.fetch(&url, RequestOptions::default(), false).await;

    assert!(!outcome.is_error());
}

#[tokio::test]
async fn bypass_skips_both_cache_read_and_write() {
    let server = MockServer::start().await;
    let url = format!("{}/v4/random/anime", server.uri());

    Mock::given(method("GET"))
        .and(path("/v4/random/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"mal_id": 1}})))
        .expect(3)
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();

    // Bypassed call: hits the network, must not populate the cache.
    gateway.fetch(&url, RequestOptions::default(), true).await;

    // Non-bypassed call: cache is cold, so the network is hit again —
    // and this one does populate the cache.
    gateway.fetch(&url, RequestOptions::default(), false).await;
    gateway.fetch(&url, RequestOptions::default(), false).await; // cache hit

    // Bypassed call again: ignores the now-populated cache.
    gateway.fetch(&url, RequestOptions::default(), true).await;
}

#[tokio::test]
async fn failures_are_never_cached() {
    let server = MockServer::start().await;
    let url = anime_url(&server);

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [1]})))
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();

    let first = gateway.fetch(&url, RequestOptions::default(), false).await;
    assert!(first.is_error());

    // The failure was not cached; the retry reaches the recovered upstream.
    let second = gateway.fetch(&url, RequestOptions::default(), false).await;
    assert_eq!(second.payload(), Some(&json!({"data": [1]})));
}

// =========================================================================
// Uniform error shape
// =========================================================================

#[tokio::test]
async fn http_error_collapses_to_uniform_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();
    let outcome = gateway
        .fetch(&anime_url(&server), RequestOptions::default(), false)
        .await;

    assert_eq!(outcome.error_message(), Some("HTTP error: status 500"));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({"error": true, "message": "HTTP error: status 500"})
    );
}

#[tokio::test]
async fn embedded_provider_error_collapses_to_uniform_shape() {
    let server = MockServer::start().await;

    // 200 OK, but the body carries the provider's own error convention.
    Mock::given(method("GET"))
        .and(path("/api/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "Not Found"})))
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();
    let outcome = gateway
        .fetch(
            &format!("{}/api/search/?query=x", server.uri()),
            RequestOptions::default(),
            false,
        )
        .await;

    let message = outcome.error_message().expect("must be the error shape");
    assert!(message.contains("Not Found"), "got: {message}");
}

#[tokio::test]
async fn embedded_ok_marker_is_a_success() {
    let server = MockServer::start().await;
    let payload = json!({"error": "OK", "results": [{"guid": "3030-1"}]});

    Mock::given(method("GET"))
        .and(path("/api/games/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();
    let outcome = gateway
        .fetch(
            &format!("{}/api/games/?limit=1", server.uri()),
            RequestOptions::default(),
            false,
        )
        .await;

    assert_eq!(outcome.payload(), Some(&payload));
}

#[tokio::test]
async fn transport_fault_collapses_to_uniform_shape() {
    // Nothing listens on port 1.
    let gateway = Metafetch::builder().build().unwrap();
    let outcome = gateway
        .fetch(
            "http://127.0.0.1:1/v4/anime?q=x",
            RequestOptions::default(),
            false,
        )
        .await;

    let message = outcome.error_message().expect("must be the error shape");
    assert!(!message.is_empty());
}

#[tokio::test]
async fn invalid_json_body_collapses_to_uniform_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let gateway = Metafetch::builder().build().unwrap();
    let outcome = gateway
        .fetch(&anime_url(&server), RequestOptions::default(), false)
        .await;

    assert!(outcome.is_error());
}

// =========================================================================
// Rate-limit routing
// =========================================================================

#[tokio::test]
async fn rate_limited_origin_requests_are_spaced_and_ordered() {
    let server = MockServer::start().await;
    let spacing = Duration::from_millis(200);

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"mal_id": 20}]})))
        .expect(3)
        .mount(&server)
        .await;

    let gateway = Metafetch::builder()
        .endpoints(ProviderEndpoints::new().jikan(format!("{}/v4", server.uri())))
        .request_spacing(spacing)
        .build()
        .unwrap();

    let url = anime_url(&server);
    let started = Instant::now();
    let (a, b, c) = tokio::join!(
        gateway.fetch(&url, RequestOptions::default(), false),
        gateway.fetch(&url, RequestOptions::default(), false),
        gateway.fetch(&url, RequestOptions::default(), false),
    );
    let elapsed = started.elapsed();

    for outcome in [&a, &b, &c] {
        assert_eq!(outcome.payload(), Some(&json!({"data": [{"mal_id": 20}]})));
    }
    // Two full gaps must separate the three calls.
    assert!(
        elapsed >= spacing * 2,
        "3 rate-limited calls finished in {elapsed:?}"
    );
}

#[tokio::test]
async fn other_hosts_are_not_delayed_by_the_queue() {
    let jikan = MockServer::start().await;
    let tmdb = MockServer::start().await;
    let spacing = Duration::from_millis(300);

    Mock::given(method("GET"))
        .and(path("/v4/anime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&jikan)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/trending/movie/week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&tmdb)
        .await;

    let gateway = Metafetch::builder()
        .endpoints(ProviderEndpoints::new().jikan(format!("{}/v4", jikan.uri())))
        .request_spacing(spacing)
        .build()
        .unwrap();

    let jikan_url = anime_url(&jikan);
    let tmdb_url = format!("{}/3/trending/movie/week", tmdb.uri());

    // Three queued rate-limited calls, plus one independent call.
    let direct = async {
        let started = Instant::now();
        let outcome = gateway.fetch(&tmdb_url, RequestOptions::default(), false).await;
        (outcome, started.elapsed())
    };
    let (_, _, _, (outcome, direct_elapsed)) = tokio::join!(
        gateway.fetch(&jikan_url, RequestOptions::default(), false),
        gateway.fetch(&jikan_url, RequestOptions::default(), false),
        gateway.fetch(&jikan_url, RequestOptions::default(), false),
        direct,
    );

    assert!(!outcome.is_error());
    assert!(
        direct_elapsed < spacing,
        "direct call waited on the queue: {direct_elapsed:?}"
    );
}
