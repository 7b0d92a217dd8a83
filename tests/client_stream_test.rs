//! Streaming client tests using wiremock.
//!
//! These tests verify that the GeminiClient posts to the streaming endpoint
//! with the expected query and body, and that the response body comes back
//! as transport events the processor can print.

mod common;

use common::{metadata_line, text_line};
use groundline::client::GeminiClient;
use groundline::config::Config;
use groundline::error::{NetworkError, StreamError};
use groundline::session::run_prompt;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "test-model";
const STREAM_PATH: &str = "/v1beta/models/test-model:streamGenerateContent";

fn test_api_key() -> String {
    "test-api-key".to_string()
}

fn client_for(server: &MockServer) -> GeminiClient {
    let config = Config::default()
        .with_api_key(test_api_key())
        .with_model(MODEL)
        .with_base_url(server.uri());
    GeminiClient::new(config).unwrap()
}

fn sse_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/event-stream")
        .set_body_string(body)
}

#[tokio::test]
async fn test_stream_prints_grounded_answer() {
    let mock_server = MockServer::start().await;

    let body = [
        text_line("Looking it up.", true),
        text_line("Paris", false),
        metadata_line(&[&[0]], &[("https://fr.example", "France")]),
        "data: [DONE]\n".to_string(),
    ]
    .concat();

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .and(query_param("alt", "sse"))
        .and(query_param("key", test_api_key()))
        .and(header("Accept", "text/event-stream"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "parts": [{ "text": "capital of France?" }] }],
            "tools": [{ "google_search": {} }],
            "generationConfig": { "thinkingConfig": { "includeThoughts": true } }
        })))
        .respond_with(sse_response(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut out = Vec::new();
    let summary = run_prompt(&client, "capital of France?", &mut out)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Thoughts:\nLooking it up.Answer:\nParis\n\nCitations:\n[1] France: https://fr.example\n"
    );
    assert_eq!(summary.citations, 1);
    assert!(summary.saw_done);
}

#[tokio::test]
async fn test_stream_skips_malformed_event() {
    let mock_server = MockServer::start().await;

    let body = [
        text_line("one ", false),
        "data: not json\n".to_string(),
        text_line("two", false),
    ]
    .concat();

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(sse_response(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut out = Vec::new();
    let summary = run_prompt(&client, "count", &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Answer:\none two\nno grounding metadata available\n"
    );
    assert_eq!(summary.malformed_events, 1);
}

#[tokio::test]
async fn test_http_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.stream("hello").await;

    match result {
        Err(NetworkError::HttpStatus { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("API key not valid"));
        }
        Err(other) => panic!("Expected HttpStatus, got {:?}", other),
        Ok(_) => panic!("Expected an error"),
    }
}

#[tokio::test]
async fn test_rate_limited_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut out = Vec::new();
    let result = run_prompt(&client, "hello", &mut out).await;

    assert!(matches!(
        result,
        Err(StreamError::Transport(NetworkError::RateLimited {
            retry_after_secs: Some(30)
        }))
    ));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_search_and_thoughts_can_be_disabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(STREAM_PATH))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "parts": [{ "text": "plain" }] }]
        })))
        .respond_with(sse_response(text_line("ok", false)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::default()
        .with_api_key(test_api_key())
        .with_model(MODEL)
        .with_base_url(mock_server.uri())
        .with_google_search(false)
        .with_include_thoughts(false);
    let client = GeminiClient::new(config).unwrap();

    let request = serde_json::to_value(client.build_request("plain")).unwrap();
    assert!(request.get("tools").is_none());
    assert!(request.get("generationConfig").is_none());

    let mut out = Vec::new();
    run_prompt(&client, "plain", &mut out).await.unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("Answer:\nok"));
}
