//! Integration tests for the resource facades.
//!
//! Each test pins the exact GraphQL document a facade posts. A document that
//! does not match falls through to the mock server's 404, which fails the
//! test with a `ResourceNotFound` error.

use monday_api::resources::{Args, BoardKind, Me, Select, UserKind};
use monday_api::webhooks::WebhookEvent;
use monday_api::{ApiToken, Client, ErrorKind, HostUrl, MondayConfig};
use serde_json::json;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> Client {
    let config = MondayConfig::builder()
        .token(ApiToken::new("test-token").unwrap())
        .host(HostUrl::new(format!("{}/v2", server.uri())).unwrap())
        .build()
        .unwrap();
    Client::new(Some(&config)).unwrap()
}

/// Expects exactly one request whose body is `document`.
async fn expect_document(server: &MockServer, document: &str, data: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(body_string(document))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Me
// ============================================================================

#[tokio::test]
async fn test_me_query_with_selection() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        "query { me { id name } }",
        json!({"me": {"id": "1", "name": "Ada"}}),
    )
    .await;

    let client = create_test_client(&server);
    let response = client
        .me()
        .query(Some(Select::new(["id", "name"])))
        .await
        .unwrap();

    assert_eq!(response.body["data"]["me"]["name"], "Ada");
}

#[tokio::test]
async fn test_me_query_uses_default_selection() {
    let server = MockServer::start().await;
    let document = format!("query {{ me {{ {} }} }}", Me::default_select());
    expect_document(&server, &document, json!({"me": {"id": "1"}})).await;

    let client = create_test_client(&server);
    client.me().query(None).await.unwrap();

    assert!(document.contains("account { id name }"));
    assert!(document.contains("teams { id name }"));
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_user_query_formats_arguments() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        "query { users(kind: non_guests, limit: 50) { id email } }",
        json!({"users": []}),
    )
    .await;

    let client = create_test_client(&server);
    client
        .user()
        .query(
            Args::new().arg("kind", UserKind::NonGuests).arg("limit", 50),
            Some(Select::new(["id", "email"])),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_user_query_without_arguments() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        "query { users { id name email photo_thumb title } }",
        json!({"users": []}),
    )
    .await;

    let client = create_test_client(&server);
    client.user().query(Args::new(), None).await.unwrap();
}

// ============================================================================
// Webhooks
// ============================================================================

#[tokio::test]
async fn test_webhook_query() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        "query { webhooks(board_id: 123, app_webhooks_only: true) { id board_id event config } }",
        json!({"webhooks": []}),
    )
    .await;

    let client = create_test_client(&server);
    client.webhook().query(123, true, None).await.unwrap();
}

#[tokio::test]
async fn test_webhook_query_omits_false_app_filter() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        "query { webhooks(board_id: 123) { id } }",
        json!({"webhooks": []}),
    )
    .await;

    let client = create_test_client(&server);
    client
        .webhook()
        .query(123, false, Some(Select::new(["id"])))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_webhook_create_with_config() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        r#"mutation { create_webhook(board_id: 123, url: "https://example.com/hook", event: change_specific_column_value, config: "{\"columnId\":\"status\"}") { id board_id event config } }"#,
        json!({"create_webhook": {"id": "9"}}),
    )
    .await;

    let client = create_test_client(&server);
    let response = client
        .webhook()
        .create(
            123,
            "https://example.com/hook",
            WebhookEvent::ChangeSpecificColumnValue,
            Some(json!({"columnId": "status"})),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.body["data"]["create_webhook"]["id"], "9");
}

#[tokio::test]
async fn test_webhook_delete() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        "mutation { delete_webhook(id: 9) { id board_id } }",
        json!({"delete_webhook": {"id": "9", "board_id": "123"}}),
    )
    .await;

    let client = create_test_client(&server);
    client.webhook().delete(9, None).await.unwrap();
}

// ============================================================================
// Boards
// ============================================================================

#[tokio::test]
async fn test_board_query() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        "query { boards(ids: [1, 2]) { id name description } }",
        json!({"boards": []}),
    )
    .await;

    let client = create_test_client(&server);
    client
        .board()
        .query(Args::new().arg("ids", vec![1, 2]), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_board_create_merges_extra_arguments() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        r#"mutation { create_board(board_name: "Roadmap", board_kind: public, workspace_id: 7) { id } }"#,
        json!({"create_board": {"id": "55"}}),
    )
    .await;

    let client = create_test_client(&server);
    client
        .board()
        .create(
            "Roadmap",
            BoardKind::Public,
            Args::new().arg("workspace_id", 7),
            Some(Select::new(["id"])),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_board_archive_and_delete() {
    let server = MockServer::start().await;
    expect_document(
        &server,
        "mutation { archive_board(board_id: 55) { id } }",
        json!({"archive_board": {"id": "55"}}),
    )
    .await;
    expect_document(
        &server,
        "mutation { delete_board(board_id: 55) { id state } }",
        json!({"delete_board": {"id": "55", "state": "deleted"}}),
    )
    .await;

    let client = create_test_client(&server);
    client.board().archive(55, None).await.unwrap();
    client
        .board()
        .delete(55, Some(Select::new(["id", "state"])))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_facade_errors_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "error_code": "ComplexityException",
                "error_message": "Complexity budget exhausted"
            })),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = client.board().query(Args::new(), None).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Complexity);
    assert_eq!(error.message(), "ComplexityException");
    assert_eq!(error.code(), Some("COMPLEXITY_BUDGET_EXHAUSTED"));
}
