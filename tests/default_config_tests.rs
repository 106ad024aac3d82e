//! Integration tests for the process-wide default configuration.
//!
//! The default can only be installed once per process, so every step lives
//! in a single test to keep the order deterministic.

use monday_api::config::{default_config, set_default_config};
use monday_api::{ApiToken, Client, ConfigError, HostUrl, MondayConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(host: &str, token: &str) -> MondayConfig {
    MondayConfig::builder()
        .token(ApiToken::new(token).unwrap())
        .host(HostUrl::new(host).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_default_config_lifecycle() {
    let server = MockServer::start().await;
    let host = format!("{}/v2", server.uri());

    // Nothing installed yet
    assert!(default_config().is_none());
    assert!(matches!(
        Client::new(None),
        Err(ConfigError::DefaultConfigNotSet)
    ));

    // First assignment wins
    set_default_config(config_for(&host, "default-token")).unwrap();
    assert!(matches!(
        set_default_config(config_for(&host, "other-token")),
        Err(ConfigError::DefaultConfigAlreadySet)
    ));
    assert_eq!(default_config().unwrap().token().as_ref(), "default-token");

    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(header("Authorization", "default-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2"))
        .and(header("Authorization", "explicit-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    // A client without explicit config picks up the default
    let default_client = Client::new(None).unwrap();
    default_client.query("query { me { id } }").await.unwrap();

    // An explicit config overrides the default
    let explicit = config_for(&host, "explicit-token");
    let explicit_client = Client::new(Some(&explicit)).unwrap();
    explicit_client.query("query { me { id } }").await.unwrap();
}
