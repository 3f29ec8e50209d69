//! # Health Probe and Middleware Tests
//!
//! Health endpoints, CORS preflight, and request ID headers.

use super::test_infrastructure::*;
use client_config_server::config::ServerConfig;
use client_config_server::diagnostics::LogLevel;

#[tokio::test]
async fn test_basic_probes() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    for (path, expected) in [
        ("/health", "ok"),
        ("/health/live", "alive"),
        ("/health/ready", "ready"),
    ] {
        let response = client.get(path).await.expect("Failed to send request");
        let body = assert_json_response(response, 200, &["status", "timestamp"]).await;
        assert_eq!(body["status"], expected, "unexpected status for {path}");
    }

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_detailed_health_degraded_without_credentials() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let response = client
        .get("/health/detailed")
        .await
        .expect("Failed to send request");
    let body = assert_json_response(
        response,
        200,
        &["status", "version", "environment", "uptime_seconds", "credentials"],
    )
    .await;

    assert_eq!(body["status"], "degraded");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["credentials"]["url_configured"], false);
    assert_eq!(body["credentials"]["key_configured"], false);

    // The probe must not produce the endpoint's diagnostic entries
    assert!(server.diagnostics.entries().is_empty());

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_detailed_health_never_exposes_values() {
    let server = TestServer::start_with_env(&[
        ("SUPABASE_URL", "https://secret-project.supabase.co"),
        ("SUPABASE_KEY", "super-secret-key"),
    ])
    .await
    .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let text = client
        .get("/health/detailed")
        .await
        .expect("Failed to send request")
        .text()
        .await
        .expect("Failed to read body");

    assert!(text.contains("\"healthy\""));
    assert!(!text.contains("secret-project"));
    assert!(!text.contains("super-secret-key"));

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_detailed_health_flags_placeholders() {
    let server = TestServer::start_with_env(&[
        ("SUPABASE_URL", "https://example.supabase.co"),
        ("SUPABASE_KEY", "eyJhbGciOi"),
    ])
    .await
    .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let body = assert_json_response(
        client.get("/health/detailed").await.expect("Failed to send request"),
        200,
        &["credentials"],
    )
    .await;

    assert_eq!(body["status"], "degraded");
    assert_eq!(body["credentials"]["url_placeholder"], true);
    assert_eq!(body["credentials"]["key_placeholder"], false);

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_cors_preflight_request() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let response = client
        .raw()
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/config/client-env", client.base_url()),
        )
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to send OPTIONS request");

    assert_eq!(response.status().as_u16(), 200);
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(headers.get("access-control-allow-methods").is_some());

    // Preflight never reaches the handler
    assert_eq!(server.diagnostics.count_at(LogLevel::Error), 0);

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_cors_disabled_sends_no_cors_headers() {
    let mut config = ServerConfig::default();
    config.web.cors.enabled = false;

    let server = TestServer::start_with(&[], config)
        .await
        .expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let response = client
        .raw()
        .get(format!("{}/health", client.base_url()))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("access-control-allow-origin").is_none());

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let mut ids = Vec::new();
    for _ in 0..3 {
        let response = client.get("/health").await.expect("Failed to send request");
        let id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .expect("x-request-id header")
            .to_string();
        ids.push(id);
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    server.shutdown().await.expect("Failed to shutdown test server");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start test server");
    let client = WebTestClient::for_server(&server).expect("Failed to create test client");

    let response = client
        .get("/config/server-env")
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 404);

    server.shutdown().await.expect("Failed to shutdown test server");
}
