//! OllamaClient against a mock Ollama server.

use serde_json::json;
use synresd::config::OllamaConfig;
use synresd::ollama::{LlmBackend, OllamaClient};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, max_retries: u32) -> OllamaConfig {
    OllamaConfig {
        model: "llama3.1:8b".to_string(),
        url: format!("{}/api/generate", server.uri()),
        tags_url: format!("{}/api/tags", server.uri()),
        timeout_secs: 5,
        max_retries,
        ..OllamaConfig::default()
    }
}

#[tokio::test]
async fn test_generate_returns_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"model": "llama3.1:8b", "prompt": "hi", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hello there"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server, 3)).unwrap();
    assert_eq!(client.generate("hi", 0.5).await.unwrap(), "hello there");
}

#[tokio::test]
async fn test_generate_missing_response_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server, 1)).unwrap();
    assert_eq!(client.generate("hi", 0.5).await.unwrap(), "");
}

#[tokio::test]
async fn test_generate_retries_then_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server, 2)).unwrap();
    let err = client.generate("hi", 0.5).await.unwrap_err();
    assert!(err.to_string().starts_with("Ollama error:"));
}

#[tokio::test]
async fn test_is_available() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server, 1)).unwrap();
    assert!(client.is_available().await);

    let unreachable = OllamaClient::new(OllamaConfig {
        tags_url: "http://127.0.0.1:9/api/tags".to_string(),
        health_timeout_secs: 1,
        ..OllamaConfig::default()
    })
    .unwrap();
    assert!(!unreachable.is_available().await);
}

#[tokio::test]
async fn test_is_available_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = OllamaClient::new(config_for(&server, 1)).unwrap();
    assert!(client.is_available().await);
}
