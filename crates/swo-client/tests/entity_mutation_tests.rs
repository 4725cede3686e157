//! URI and website mutations answered in the `dem` reply shapes.

mod common;

use serde_json::json;
use swo_client::operations::entities::{
    CreateUriInput, CreateWebsiteInput, UpdateUriInput, UpdateWebsiteInput, UriTestDefinitions,
};
use swo_client::{CancellationToken, ClientError, TestIntervalInSeconds};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client_for, respond};

fn uri_input() -> CreateUriInput {
    CreateUriInput {
        name: "probe".into(),
        ip_or_domain: "example.com".into(),
        test_definitions: UriTestDefinitions {
            test_interval_in_seconds: TestIntervalInSeconds::TEN_MINUTES,
            test_from: None,
        },
        options: None,
        tcp_options: None,
    }
}

fn website_input() -> CreateWebsiteInput {
    CreateWebsiteInput {
        name: "site".into(),
        url: "https://www.solarwinds.com".into(),
        availability_check_settings: None,
        rum: None,
    }
}

#[tokio::test]
async fn test_create_uri_reads_bare_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "createUriMutation",
            "variables": { "input": {
                "name": "probe",
                "ipOrDomain": "example.com",
                "testDefinitions": { "testIntervalInSeconds": 600 }
            } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "dem": { "createUri": { "id": "u-9" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .uris()
        .create(&CancellationToken::new(), uri_input())
        .await
        .expect("create failed");

    assert_eq!(created.id, "u-9");
}

#[tokio::test]
async fn test_uri_update_and_delete_accept_id_reply() {
    let server = MockServer::start().await;
    respond(&server, "updateUriMutation", json!({ "dem": { "updateUri": { "id": "u-1" } } })).await;
    respond(&server, "deleteUriMutation", json!({ "dem": { "deleteUri": { "id": "u-1" } } })).await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let input = uri_input();

    client
        .uris()
        .update(
            &cancel,
            UpdateUriInput {
                id: "u-1".into(),
                name: input.name,
                ip_or_domain: input.ip_or_domain,
                test_definitions: input.test_definitions,
                options: None,
                tcp_options: None,
            },
        )
        .await
        .expect("update failed");

    client.uris().delete(&cancel, "u-1").await.expect("delete failed");
}

#[tokio::test]
async fn test_website_lifecycle_with_success_variants() {
    let server = MockServer::start().await;
    respond(
        &server,
        "createWebsiteMutation",
        json!({ "dem": { "createWebsite": { "__typename": "CreateWebsiteSuccess", "id": "w-1" } } }),
    )
    .await;
    respond(
        &server,
        "updateWebsiteMutation",
        json!({ "dem": { "updateWebsite": { "__typename": "UpdateWebsiteSuccess", "id": "w-1" } } }),
    )
    .await;
    respond(
        &server,
        "deleteWebsiteMutation",
        json!({ "dem": { "deleteWebsite": { "id": "w-1" } } }),
    )
    .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();

    let created = client
        .websites()
        .create(&cancel, website_input())
        .await
        .expect("create failed");
    assert_eq!(created.id, "w-1");

    client
        .websites()
        .update(
            &cancel,
            UpdateWebsiteInput {
                id: created.id.clone(),
                name: "site".into(),
                url: "https://www.solarwinds.com".into(),
                availability_check_settings: None,
                rum: None,
            },
        )
        .await
        .expect("update failed");

    client
        .websites()
        .delete(&cancel, &created.id)
        .await
        .expect("delete failed");
}

#[tokio::test]
async fn test_website_failure_variant_is_rejected() {
    let server = MockServer::start().await;
    respond(
        &server,
        "deleteWebsiteMutation",
        json!({ "dem": { "deleteWebsite": { "__typename": "DeleteWebsiteFailure" } } }),
    )
    .await;

    let err = client_for(&server)
        .websites()
        .delete(&CancellationToken::new(), "w-1")
        .await
        .unwrap_err();

    assert!(err.is_rejected());
    assert_eq!(
        err.to_string(),
        "delete website failed. code: DeleteWebsiteFailure message: "
    );
}

#[tokio::test]
async fn test_create_without_id_is_missing_payload() {
    let server = MockServer::start().await;
    respond(
        &server,
        "createWebsiteMutation",
        json!({ "dem": { "createWebsite": { "__typename": "CreateWebsiteSuccess" } } }),
    )
    .await;

    let err = client_for(&server)
        .websites()
        .create(&CancellationToken::new(), website_input())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::MissingPayload { action: "create website failed", .. }
    ));
}
