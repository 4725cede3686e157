//! Shared fixtures for the service tests.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{Value, json};
use swo_client::{Client, ClientConfig, ExponentialBackoff, ReadPolicy};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// A short retry budget so eventually-consistent reads finish quickly.
pub fn fast_retry(max_elapsed: Duration) -> ReadPolicy {
    ReadPolicy::RetryUntilFound(
        ExponentialBackoff::default()
            .initial_interval(Duration::from_millis(20))
            .max_interval(Duration::from_millis(100))
            .max_elapsed_time(max_elapsed),
    )
}

pub fn endpoint(server: &MockServer) -> String {
    format!("{}/graphql", server.uri())
}

pub fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder()
        .base_url(endpoint(server))
        .request_timeout(Duration::from_secs(5))
        .uri_read_policy(fast_retry(Duration::from_secs(2)))
        .build();
    assert!(config.warnings().is_empty(), "{:?}", config.warnings());
    Client::new(TOKEN, config).expect("Failed to build client")
}

/// Answer every request for `operation` with `{ "data": data }`.
pub async fn respond(server: &MockServer, operation: &str, data: Value) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": operation })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .mount(server)
        .await;
}

/// Answer the next `times` requests for `operation` with `{ "data": data }`.
pub async fn respond_times(server: &MockServer, operation: &str, data: Value, times: u64) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": operation })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .up_to_n_times(times)
        .expect(times)
        .mount(server)
        .await;
}

/// A mutation envelope with the given outcome.
pub fn envelope(success: bool, code: &str, message: &str) -> Value {
    json!({ "success": success, "code": code, "message": message })
}

/// Same as [`envelope`] with `payload` under `field`.
pub fn envelope_with(success: bool, field: &str, payload: Value) -> Value {
    let mut value = envelope(success, "", "");
    value[field] = payload;
    value
}
