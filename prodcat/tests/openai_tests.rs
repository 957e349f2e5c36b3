//! OpenAI client tests against a mocked completions endpoint.

use prodcat::{AiError, CompletionProvider, OpenAiClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new("test-key".to_string())
        .with_base_url(format!("{}/v1/chat/completions", server.uri()))
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            {"message": {"role": "assistant", "content": content}}
        ]
    })
}

#[tokio::test]
async fn test_complete_returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("MainCategory: Electronics")),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let reply = client.complete("classify this", 50, 0.5).await.unwrap();
    assert_eq!(reply, "MainCategory: Electronics");
}

#[tokio::test]
async fn test_complete_sends_expected_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 100,
            "temperature": 0.5,
            "messages": [{"role": "user", "content": "who makes this"}]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("Manufacturers: Sony")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let reply = client.complete("who makes this", 100, 0.5).await.unwrap();
    assert_eq!(reply, "Manufacturers: Sony");
}

#[tokio::test]
async fn test_complete_trims_surrounding_whitespace() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("  Subcategory: Smartphones \n")),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let reply = client.complete("classify this", 50, 0.5).await.unwrap();
    assert_eq!(reply, "Subcategory: Smartphones");
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client.complete("classify this", 50, 0.5).await;
    match result {
        Err(AiError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected Api error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_empty_choices_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let result = client.complete("classify this", 50, 0.5).await;
    assert!(matches!(result, Err(AiError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_empty_api_key_fails_before_sending() {
    // No server: the request must not go out at all.
    let client = OpenAiClient::new(String::new());
    let result = client.complete("classify this", 50, 0.5).await;
    assert!(matches!(result, Err(AiError::MissingApiKey)));
}
