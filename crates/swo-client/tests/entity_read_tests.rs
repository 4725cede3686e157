//! Polymorphic reads of URI and website checks.

mod common;

use std::time::{Duration, Instant};

use serde_json::json;
use swo_client::{
    CancellationToken, Client, ClientConfig, ClientError, ReadPolicy, TestIntervalInSeconds,
};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{TOKEN, client_for, endpoint, fast_retry, respond, respond_times};

const GET_ENTITY: &str = "getEntityById";

fn uri_entity(id: &str) -> serde_json::Value {
    json!({ "entities": { "byId": {
        "__typename": "Uri",
        "id": id,
        "name": "probe",
        "ipOrDomain": "example.com",
        "testDefinitions": { "testIntervalInSeconds": 1800 },
        "options": { "isPingEnabled": true, "isTcpEnabled": false }
    } } })
}

fn website_entity(id: &str) -> serde_json::Value {
    json!({ "entities": { "byId": {
        "__typename": "Website",
        "id": id,
        "name": "site",
        "url": "https://example.com",
        "monitoring": {
            "availability": { "testIntervalInSeconds": 300, "protocols": ["HTTPS"] }
        }
    } } })
}

fn missing() -> serde_json::Value {
    json!({ "entities": { "byId": null } })
}

fn client_with(server: &MockServer, uri: ReadPolicy, website: ReadPolicy) -> Client {
    let config = ClientConfig::builder()
        .base_url(endpoint(server))
        .uri_read_policy(uri)
        .website_read_policy(website)
        .build();
    Client::new(TOKEN, config).expect("Failed to build client")
}

#[tokio::test]
async fn test_read_uri_narrows_to_uri() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": GET_ENTITY,
            "variables": { "id": "u-1" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": uri_entity("u-1") })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = client_for(&server)
        .uris()
        .read(&CancellationToken::new(), "u-1")
        .await
        .expect("read failed");

    assert_eq!(uri.id, "u-1");
    assert_eq!(uri.ip_or_domain.as_deref(), Some("example.com"));
    assert_eq!(
        uri.test_definitions.map(|t| t.test_interval_in_seconds),
        Some(TestIntervalInSeconds::THIRTY_MINUTES)
    );
}

#[tokio::test]
async fn test_read_website_narrows_to_website() {
    let server = MockServer::start().await;
    respond(&server, GET_ENTITY, website_entity("w-1")).await;

    let website = client_for(&server)
        .websites()
        .read(&CancellationToken::new(), "w-1")
        .await
        .expect("read failed");

    assert_eq!(website.url.as_deref(), Some("https://example.com"));
    let availability = website.monitoring.and_then(|m| m.availability).unwrap();
    assert_eq!(availability.test_interval_in_seconds, TestIntervalInSeconds::FIVE_MINUTES);
}

#[tokio::test]
async fn test_read_website_of_other_kind_is_unexpected_variant() {
    let server = MockServer::start().await;
    respond(&server, GET_ENTITY, uri_entity("u-1")).await;

    let err = client_for(&server)
        .websites()
        .read(&CancellationToken::new(), "u-1")
        .await
        .unwrap_err();

    match err {
        ClientError::UnexpectedVariant { expected, actual } => {
            assert_eq!(expected, "Website");
            assert_eq!(actual, "Uri");
        }
        other => panic!("expected UnexpectedVariant, got {other:?}"),
    }
}

#[tokio::test]
async fn test_read_uri_of_unknown_kind_is_unexpected_variant() {
    let server = MockServer::start().await;
    respond(
        &server,
        GET_ENTITY,
        json!({ "entities": { "byId": { "__typename": "Host", "id": "h-1" } } }),
    )
    .await;

    let err = client_for(&server)
        .uris()
        .read(&CancellationToken::new(), "h-1")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "unexpected type Host, expected Uri");
}

#[tokio::test]
async fn test_read_website_null_is_not_found_after_one_query() {
    let server = MockServer::start().await;
    respond_times(&server, GET_ENTITY, missing(), 1).await;

    let err = client_for(&server)
        .websites()
        .read(&CancellationToken::new(), "w-404")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound { kind: "website", .. }));
}

#[tokio::test]
async fn test_read_uri_retries_until_visible() {
    let server = MockServer::start().await;
    respond_times(&server, GET_ENTITY, missing(), 2).await;
    respond(&server, GET_ENTITY, uri_entity("u-new")).await;

    let uri = client_for(&server)
        .uris()
        .read(&CancellationToken::new(), "u-new")
        .await
        .expect("read failed");

    assert_eq!(uri.id, "u-new");
}

#[tokio::test]
async fn test_read_uri_times_out_when_never_visible() {
    let server = MockServer::start().await;
    respond(&server, GET_ENTITY, missing()).await;

    let ceiling = Duration::from_millis(300);
    let client = client_with(&server, fast_retry(ceiling), ReadPolicy::Immediate);

    let started = Instant::now();
    let err = client
        .uris()
        .read(&CancellationToken::new(), "u-never")
        .await
        .unwrap_err();

    assert!(started.elapsed() < ceiling + Duration::from_secs(1));
    match err {
        ClientError::Timeout { kind, id, attempts, .. } => {
            assert_eq!(kind, "uri");
            assert_eq!(id, "u-never");
            assert!(attempts >= 2, "only {attempts} attempts");
        }
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_immediate_policy_for_uris() {
    let server = MockServer::start().await;
    respond_times(&server, GET_ENTITY, missing(), 1).await;

    let client = client_with(&server, ReadPolicy::Immediate, ReadPolicy::Immediate);
    let err = client
        .uris()
        .read(&CancellationToken::new(), "u-1")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound { kind: "uri", .. }));
}

#[tokio::test]
async fn test_cancel_during_retry_returns_promptly() {
    let server = MockServer::start().await;
    respond(&server, GET_ENTITY, missing()).await;

    let client = client_with(
        &server,
        fast_retry(Duration::from_secs(30)),
        ReadPolicy::Immediate,
    );
    let cancel = CancellationToken::new();

    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(150)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let err = client.uris().read(&cancel, "u-1").await.unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_cancelled_before_read_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": uri_entity("u-1") })))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client_for(&server).uris().read(&cancel, "u-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
}
