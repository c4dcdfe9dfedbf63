//! Common test utilities for integration tests.
//!
//! The API is served from in-memory fixtures, so tests build the router directly and
//! drive it with `tower::ServiceExt::oneshot`.

// Not every integration test binary uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use domain::services::UnknownArtistPolicy;
use talent_portal_api::{
    app::create_app,
    config::{Config, FiltersConfig, LoggingConfig, SecurityConfig, ServerConfig},
};
use tower::ServiceExt;

/// Test configuration with the given unknown-artist policy.
pub fn test_config_with_policy(policy: UnknownArtistPolicy) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
        },
        filters: FiltersConfig {
            unknown_artist: policy,
        },
    }
}

/// Test configuration with default settings.
pub fn test_config() -> Config {
    test_config_with_policy(UnknownArtistPolicy::default())
}

/// Create a test application router.
pub fn create_test_app(config: Config) -> Router {
    create_app(config)
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a GET request and parse the JSON response body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(get_request(uri)).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "Failed to parse response body. Status: {}, Body: {:?}",
            status,
            String::from_utf8_lossy(&body)
        )
    });
    (status, json)
}

/// Campaign ids in response order.
pub fn campaign_ids(json: &serde_json::Value) -> Vec<String> {
    json["campaigns"]
        .as_array()
        .unwrap_or_else(|| panic!("Missing campaigns array in response: {}", json))
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}
