// HTTP front tests - routing, validation, and backend forwarding
//
// The router is driven in-memory via tower's oneshot; the Ollama
// backend is stubbed with wiremock.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use ollama_gateway::application::gateway::ChatGateway;
use ollama_gateway::infrastructure::model::OllamaClient;
use ollama_gateway::infrastructure::server;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Respond, ResponseTemplate};

fn app(endpoint: &str) -> Router {
    let gateway = Arc::new(ChatGateway::<OllamaClient>::new(endpoint));
    server::router(gateway, &[])
}

async fn post_chat(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

async fn get_model_info(app: &Router) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri("/model-info")
        .body(Body::empty())
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

/// Replies with a deterministic rendering of the turns it received:
/// the turn tags joined by commas, a pipe, then the last turn's content.
struct EchoOllama;

impl Respond for EchoOllama {
    fn respond(&self, request: &wiremock::Request) -> ResponseTemplate {
        let payload: Value = serde_json::from_slice(&request.body).expect("json payload");
        let messages = payload["messages"].as_array().expect("messages array");
        let tags: Vec<&str> = messages
            .iter()
            .map(|m| m["role"].as_str().expect("role"))
            .collect();
        let last = messages
            .last()
            .and_then(|m| m["content"].as_str())
            .unwrap_or_default();

        ResponseTemplate::new(200).set_body_json(json!({
            "message": {
                "role": "assistant",
                "content": format!("{}|{}", tags.join(","), last)
            }
        }))
    }
}

async fn echo_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(EchoOllama)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn empty_body_is_rejected_with_400() {
    let app = app("http://127.0.0.1:1");

    let (status, body) = post_chat(&app, json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid request. Please provide a list of messages and model name."
    );
}

#[tokio::test]
async fn missing_model_is_rejected_with_400() {
    let app = app("http://127.0.0.1:1");

    let body = json!({"messages": [{"role": "user", "content": "hi"}]});
    let (status, _) = post_chat(&app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn valid_chat_returns_backend_reply() {
    let backend = echo_backend().await;
    let app = app(&backend.uri());

    let body = json!({
        "messages": [
            {"role": "system", "content": "be brief"},
            {"role": "user", "content": "hi"}
        ],
        "model": "llama2"
    });
    let (status, reply) = post_chat(&app, body).await;

    assert_eq!(status, StatusCode::OK);
    // User turns cross the wire as "human"; the reply is a raw JSON string.
    assert_eq!(reply, json!("system,human|hi"));
}

#[tokio::test]
async fn unsupported_role_is_a_200_error_body() {
    let backend = echo_backend().await;
    let app = app(&backend.uri());

    let body = json!({
        "messages": [{"role": "tool", "content": "output"}],
        "model": "llama2"
    });
    let (status, reply) = post_chat(&app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({"error": "Unsupported message role: tool"}));
}

#[tokio::test]
async fn model_info_before_any_chat_is_uninitialized() {
    let app = app("http://127.0.0.1:1");

    let (status, body) = get_model_info(&app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "Model not initialized"}));
}

#[tokio::test]
async fn model_info_reports_first_bound_model() {
    let backend = echo_backend().await;
    let app = app(&backend.uri());

    let first = json!({
        "messages": [{"role": "user", "content": "hi"}],
        "model": "llama2"
    });
    let second = json!({
        "messages": [{"role": "user", "content": "again"}],
        "model": "mistral"
    });
    post_chat(&app, first).await;
    post_chat(&app, second).await;

    let (status, body) = get_model_info(&app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"model_name": "llama2", "provider": "Ollama"}));
}

#[tokio::test]
async fn backend_failure_is_a_200_error_body() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&backend)
        .await;
    let app = app(&backend.uri());

    let body = json!({
        "messages": [{"role": "user", "content": "hi"}],
        "model": "llama2"
    });
    let (status, reply) = post_chat(&app, body).await;

    assert_eq!(status, StatusCode::OK);
    let message = reply["error"].as_str().expect("error message");
    assert!(message.contains("500"));
}

#[tokio::test]
async fn backend_reply_without_message_is_an_invalid_response_error() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .mount(&backend)
        .await;
    let app = app(&backend.uri());

    let body = json!({
        "messages": [{"role": "user", "content": "hi"}],
        "model": "llama2"
    });
    let (status, reply) = post_chat(&app, body).await;

    assert_eq!(status, StatusCode::OK);
    let message = reply["error"].as_str().expect("error message");
    assert!(message.contains("missing message"));
}
