mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use shortlink::api::handlers::encode_handler;

fn encode_server() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shortlink/encode", post(encode_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_encode_success_with_default_domain() {
    let server = encode_server();

    let response = server
        .post("/shortlink/encode")
        .json(&json!({
            "long_url": "https://loooongg.looongger/something"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["domain"], "short.est");
    assert_eq!(json["long_url"], "https://loooongg.looongger/something");
    assert!(json["title"].is_null());

    let short_url = json["short_url"].as_str().unwrap();
    let token = short_url.strip_prefix("http://short.est/").unwrap();
    assert_eq!(token.len(), common::TOKEN_LEN);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_encode_with_custom_domain() {
    let server = encode_server();

    let response = server
        .post("/shortlink/encode")
        .json(&json!({
            "domain": "my.dom",
            "long_url": "https://example.com"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["domain"], "my.dom");

    let short_url = json["short_url"].as_str().unwrap();
    assert!(short_url.contains("my.dom"));
}

#[tokio::test]
async fn test_encode_with_title() {
    let server = encode_server();

    let response = server
        .post("/shortlink/encode")
        .json(&json!({
            "long_url": "https://example.com",
            "title": "Example"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["title"], "Example");
}

#[tokio::test]
async fn test_encode_duplicate_url() {
    let server = encode_server();

    server
        .post("/shortlink/encode")
        .json(&json!({ "long_url": "https://example.com" }))
        .await
        .assert_status_ok();

    // Fails on every retry, not just the first.
    for _ in 0..2 {
        let response = server
            .post("/shortlink/encode")
            .json(&json!({ "long_url": "https://example.com" }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], 400);
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .contains("already encoded")
        );
    }
}

#[tokio::test]
async fn test_encode_rejects_preset_short_url() {
    let server = encode_server();

    let response = server
        .post("/shortlink/encode")
        .json(&json!({
            "long_url": "https://example.com",
            "short_url": "http://short.est/mine1"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], 400);
    assert!(json["message"].as_str().unwrap().contains("short_url"));

    // The rejected request must not have mutated the store.
    server
        .post("/shortlink/encode")
        .json(&json!({ "long_url": "https://example.com" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_encode_missing_long_url() {
    let server = encode_server();

    let response = server.post("/shortlink/encode").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], 400);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_encode_empty_long_url() {
    let server = encode_server();

    let response = server
        .post("/shortlink/encode")
        .json(&json!({ "long_url": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], 400);
}

#[tokio::test]
async fn test_encode_distinct_urls_get_distinct_short_urls() {
    let server = encode_server();
    let mut seen = std::collections::HashSet::new();

    for i in 0..20 {
        let response = server
            .post("/shortlink/encode")
            .json(&json!({ "long_url": format!("https://example.com/{i}") }))
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();
        seen.insert(json["short_url"].as_str().unwrap().to_string());
    }

    assert_eq!(seen.len(), 20);
}
