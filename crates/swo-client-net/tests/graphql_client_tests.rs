//! Integration tests for the GraphQL executor.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bytes::Bytes;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::json;
use swo_client_net::{
    BearerAuthTransport, CancellationToken, GraphQLClient, GraphQLOperation, GraphQLRequest,
    HttpRequest, HttpResponse, HttpTransport, NetworkError, OperationType, Transport,
};
use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Serialize)]
struct ByIdVariables {
    id: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Dashboard {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct GetDashboardData {
    dashboard: Option<Dashboard>,
}

struct GetDashboard;

impl GraphQLOperation for GetDashboard {
    type Variables = ByIdVariables;
    type ResponseData = GetDashboardData;

    const QUERY: &'static str = "query getDashboard($id: ID!) { dashboard(id: $id) { id name } }";
    const OPERATION_NAME: &'static str = "getDashboard";
    const OPERATION_TYPE: OperationType = OperationType::Query;
}

fn variables(id: &str) -> ByIdVariables {
    ByIdVariables { id: id.into() }
}

async fn client_for(server: &MockServer) -> GraphQLClient {
    GraphQLClient::builder(format!("{}/graphql", server.uri()))
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_execute_typed_operation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "operationName": "getDashboard",
            "variables": { "id": "d-1" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "dashboard": { "id": "d-1", "name": "Overview" } }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let data = client
        .execute::<GetDashboard>(&CancellationToken::new(), &variables("d-1"))
        .await
        .expect("Request failed");

    assert_eq!(
        data.dashboard,
        Some(Dashboard {
            id: "d-1".into(),
            name: "Overview".into()
        })
    );
}

#[tokio::test]
async fn test_graphql_errors_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "not authorized" }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client
        .execute::<GetDashboard>(&CancellationToken::new(), &variables("d-1"))
        .await
        .unwrap_err();

    match err {
        NetworkError::GraphQL(errors) => assert_eq!(errors[0].message, "not authorized"),
        other => panic!("expected GraphQL error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client
        .execute::<GetDashboard>(&CancellationToken::new(), &variables("d-1"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "HTTP 500: internal");
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client
        .execute_request(&CancellationToken::new(), GraphQLRequest::query("{ a }"))
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Json(_)));
}

#[tokio::test]
async fn test_request_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": {} }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = GraphQLClient::builder(format!("{}/graphql", mock_server.uri()))
        .request_timeout(Duration::from_millis(100))
        .build()
        .expect("Failed to build client");

    let err = client
        .execute_request(&CancellationToken::new(), GraphQLRequest::query("{ a }"))
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Timeout));
}

#[tokio::test]
async fn test_cancel_in_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": {} }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let started = std::time::Instant::now();
    let err = client
        .execute_request(&cancel, GraphQLRequest::query("{ a }"))
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_cancelled_token_skips_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client
        .execute_request(&cancel, GraphQLRequest::query("{ a }"))
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_bearer_auth_headers_on_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("User-Agent", "tests:Swo-Api-Rust"))
        .and(header_exists("X-Request-Id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = BearerAuthTransport::new(
        "secret-token",
        "tests:Swo-Api-Rust",
        HttpTransport::new().expect("Failed to build transport"),
    )
    .expect("Failed to build auth transport");

    let client = GraphQLClient::builder(format!("{}/graphql", mock_server.uri()))
        .transport(transport)
        .build()
        .expect("Failed to build client");

    let response = client
        .execute_request(&CancellationToken::new(), GraphQLRequest::query("{ a }"))
        .await
        .expect("Request failed");
    assert!(!response.has_errors());
}

struct CannedTransport {
    calls: AtomicUsize,
}

impl Transport for CannedTransport {
    fn round_trip(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, swo_client_net::Result<HttpResponse>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            assert!(request.url.ends_with("/graphql"));
            Ok(HttpResponse {
                status: 200,
                headers: http::HeaderMap::new(),
                body: Bytes::from_static(
                    br#"{"data":{"dashboard":{"id":"d-9","name":"Canned"}}}"#,
                ),
            })
        })
    }
}

#[tokio::test]
async fn test_custom_transport() {
    let transport = Arc::new(CannedTransport {
        calls: AtomicUsize::new(0),
    });

    let client = GraphQLClient::builder("https://unused.invalid/graphql")
        .shared_transport(transport.clone())
        .build()
        .expect("Failed to build client");

    let data = client
        .execute::<GetDashboard>(&CancellationToken::new(), &variables("d-9"))
        .await
        .expect("Request failed");

    assert_eq!(data.dashboard.map(|d| d.name), Some("Canned".to_string()));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}
