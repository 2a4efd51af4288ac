//! Full stack: router → service → cache → reqwest client → mock provider.

use axum_test::TestServer;
use geocode_service::api::routes::public_routes;
use geocode_service::config::Config;
use geocode_service::server::build_geocode_service;
use geocode_service::state::AppState;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(api_url: String, cache_enabled: bool) -> Config {
    Config {
        api_key: "test-key".to_string(),
        host: "127.0.0.1".to_string(),
        port: "0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        cache_enabled,
        cache_ttl_seconds: 1800,
        request_timeout_ms: 3000,
        upstream_timeout_seconds: 5,
        geocoding_api_url: api_url,
        rate_limit_per_second: None,
        rate_limit_burst: 50,
    }
}

async fn mount_infinite_loop(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "1 infinite loop"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{
                "formatted_address": "1 Infinite Loop",
                "geometry": { "location": { "lat": 37.33, "lng": -122.03 } }
            }]
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn test_server(config: &Config) -> TestServer {
    let service = build_geocode_service(config).unwrap();
    let state = AppState::new(Arc::new(service), config.request_timeout());
    TestServer::new(public_routes().with_state(state)).unwrap()
}

#[tokio::test]
async fn test_second_lookup_served_from_cache() {
    let upstream = MockServer::start().await;
    mount_infinite_loop(&upstream, 1).await;

    let server = test_server(&config(format!("{}/geocode/json", upstream.uri()), true));

    let first = server
        .get("/geocode")
        .add_query_param("address", "1 Infinite Loop")
        .await;
    first.assert_status_ok();
    first.assert_json(&json!({
        "address": "1 Infinite Loop",
        "latitude": 37.33,
        "longitude": -122.03,
        "source": "upstream"
    }));

    let second = server
        .get("/geocode")
        .add_query_param("address", "1 infinite loop")
        .await;
    second.assert_status_ok();
    second.assert_json(&json!({
        "address": "1 Infinite Loop",
        "latitude": 37.33,
        "longitude": -122.03,
        "source": "cache"
    }));

    // `expect(1)` is verified when the mock server is dropped.
}

#[tokio::test]
async fn test_disabled_cache_always_goes_upstream() {
    let upstream = MockServer::start().await;
    mount_infinite_loop(&upstream, 2).await;

    let server = test_server(&config(format!("{}/geocode/json", upstream.uri()), false));

    for _ in 0..2 {
        let response = server
            .get("/geocode")
            .add_query_param("address", "1 Infinite Loop")
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["source"], "upstream");
    }
}
