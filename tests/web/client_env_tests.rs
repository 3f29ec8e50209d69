//! # Client Environment Endpoint Tests
//!
//! `GET /config/client-env` against a running server with an in-memory
//! environment.

use super::test_infrastructure::*;
use client_config_server::config::ServerConfig;
use client_config_server::diagnostics::LogLevel;
use client_config_server::models::ClientConfig;
use serde_json::{json, Value};

const PATH: &str = "/config/client-env";

#[tokio::test]
async fn test_returns_both_values_when_set() {
    let server = TestServer::start_with_env(&[
        ("SUPABASE_URL", "https://abcdefghijklm.supabase.co"),
        ("SUPABASE_KEY", "eyJhbGciOiJIUzI1NiJ9.anon"),
    ])
    .await
    .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let response = client.get(PATH).await.expect("Failed to send request");
    let body = assert_json_response(response, 200, &["supabase_url", "supabase_key"]).await;

    assert_eq!(
        body,
        json!({
            "supabase_url": "https://abcdefghijklm.supabase.co",
            "supabase_key": "eyJhbGciOiJIUzI1NiJ9.anon"
        })
    );
    assert_eq!(server.diagnostics.count_at(LogLevel::Error), 0);

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_returns_empty_strings_with_200_when_unset() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let response = client.get(PATH).await.expect("Failed to send request");
    let body = assert_json_response(response, 200, &[]).await;

    assert_eq!(body, json!({"supabase_url": "", "supabase_key": ""}));

    let errors = server.diagnostics.entries_at(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("mock mode"));
    assert_eq!(server.diagnostics.count_at(LogLevel::Warn), 2);

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_one_missing_value_is_empty_and_logged() {
    let server = TestServer::start_with_env(&[("SUPABASE_KEY", "eyJhbGciOi")])
        .await
        .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let config: ClientConfig = client
        .get(PATH)
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(config, ClientConfig::new("", "eyJhbGciOi"));

    let errors = server.diagnostics.entries_at(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field("missing"), Some("SUPABASE_URL"));

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_response_shape_is_exactly_two_string_fields() {
    let server = TestServer::start_with_env(&[
        ("SUPABASE_URL", "https://abc.supabase.co"),
        ("SUPABASE_KEY", "k"),
        ("SUPABASE_SERVICE_ROLE_KEY", "never-returned"),
        ("SUPABASE_TOKEN", "abcdef123"),
    ])
    .await
    .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let body: Value = client
        .get(PATH)
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let object = body.as_object().expect("response should be an object");
    assert_eq!(object.len(), 2);
    assert!(object.values().all(Value::is_string));
    assert!(!body.to_string().contains("never-returned"));

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_debug_previews_are_redacted() {
    let server = TestServer::start_with_env(&[
        ("SUPABASE_TOKEN", "abcdef123"),
        ("SUPABASE_EMPTY", ""),
    ])
    .await
    .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    client.get(PATH).await.expect("Failed to send request");

    let previews = server.diagnostics.entries_at(LogLevel::Debug);
    let token = previews
        .iter()
        .find(|entry| entry.field("variable") == Some("SUPABASE_TOKEN"))
        .expect("SUPABASE_TOKEN preview");
    assert_eq!(token.field("preview"), Some("abcde...9"));

    let empty = previews
        .iter()
        .find(|entry| entry.field("variable") == Some("SUPABASE_EMPTY"))
        .expect("SUPABASE_EMPTY preview");
    assert_eq!(empty.field("preview"), Some("(empty)"));

    assert!(!server.diagnostics.any_mentions("abcdef123"));

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_cache_buster_query_is_ignored_and_response_uncacheable() {
    let server = TestServer::start_with_env(&[
        ("SUPABASE_URL", "https://abc.supabase.co"),
        ("SUPABASE_KEY", "k"),
    ])
    .await
    .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let response = client
        .get("/config/client-env?_=1718000000000")
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
    assert!(response.headers().get("x-request-id").is_some());

    let config: ClientConfig = response.json().await.expect("Failed to parse JSON");
    assert_eq!(config, ClientConfig::new("https://abc.supabase.co", "k"));

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_each_request_observes_current_environment() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let first: ClientConfig = client.get(PATH).await.unwrap().json().await.unwrap();
    assert_eq!(first, ClientConfig::default());

    server.env.set("SUPABASE_URL", "https://abc.supabase.co");
    server.env.set("SUPABASE_KEY", "k1");
    let second: ClientConfig = client.get(PATH).await.unwrap().json().await.unwrap();
    assert_eq!(second, ClientConfig::new("https://abc.supabase.co", "k1"));

    server.env.set("SUPABASE_KEY", "k2");
    server.env.remove("SUPABASE_URL");
    let third: ClientConfig = client.get(PATH).await.unwrap().json().await.unwrap();
    assert_eq!(third, ClientConfig::new("", "k2"));

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_concurrent_requests_see_their_own_environment() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    for round in 0..5 {
        let key = format!("key-{round}");
        server.env.set("SUPABASE_URL", "https://abc.supabase.co");
        server.env.set("SUPABASE_KEY", key.as_str());

        let requests = (0..8).map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .get(PATH)
                    .await
                    .expect("Failed to send request")
                    .json::<ClientConfig>()
                    .await
                    .expect("Failed to parse JSON")
            })
        });

        for request in requests.collect::<Vec<_>>() {
            let config = request.await.expect("request task panicked");
            assert_eq!(config, ClientConfig::new("https://abc.supabase.co", key.as_str()));
        }
    }

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_custom_variable_names_from_config() {
    let mut config = ServerConfig::default();
    config.client_env.url_var = "BACKEND_URL".to_string();
    config.client_env.key_var = "BACKEND_KEY".to_string();

    let server = TestServer::start_with(
        &[
            ("BACKEND_URL", "https://api.internal"),
            ("BACKEND_KEY", "k-1"),
            ("SUPABASE_URL", "https://ignored.supabase.co"),
        ],
        config,
    )
    .await
    .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let body: ClientConfig = client.get(PATH).await.unwrap().json().await.unwrap();
    assert_eq!(body, ClientConfig::new("https://api.internal", "k-1"));

    server.shutdown().await.expect("Failed to shutdown test server");
}
