use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use alhootah::application::ports::{ChatClient, LlmClientError};
use alhootah::domain::{FileAttachment, OutboundMessage, SessionId};
use alhootah::infrastructure::llm::{GeminiChatClient, create_chat_client};
use alhootah::presentation::config::{GEMINI_BASE_URL, LlmSettings};

const MODEL: &str = "gemini-2.5-flash";
const MODEL_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiChatClient {
    GeminiChatClient::new(
        reqwest::Client::new(),
        &server.uri(),
        "test-key".to_string(),
        MODEL.to_string(),
        "You are a helpful advisor.".to_string(),
    )
}

fn text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]}
        }]
    })
}

#[tokio::test]
async fn given_text_message_when_sending_then_posts_prompt_with_credentials_and_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(header("x-session-id", "session-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("Welcome aboard")))
        .expect(1)
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .send_message(
            &SessionId::from_raw("session-7"),
            &OutboundMessage::text_only("Hello"),
        )
        .await
        .unwrap();

    assert_eq!(answer, "Welcome aboard");

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        "You are a helpful advisor."
    );
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Hello");
}

#[tokio::test]
async fn given_attachment_when_sending_then_file_bytes_travel_as_inline_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("Read it")))
        .mount(&server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let file_path = dir.path().join("policy.txt");
    std::fs::write(&file_path, "annual leave: 30 days").unwrap();
    let message = OutboundMessage::with_attachments(
        "Summarize",
        vec![FileAttachment::new(file_path, "text/plain")],
    );

    client_for(&server)
        .send_message(&SessionId::new(), &message)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    let inline = &body["contents"][0]["parts"][1]["inlineData"];
    assert_eq!(inline["mimeType"], "text/plain");
    assert_eq!(inline["data"], STANDARD.encode("annual leave: 30 days"));
}

#[tokio::test]
async fn given_missing_attachment_file_when_sending_then_fails_before_calling_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let message = OutboundMessage::with_attachments(
        "Summarize",
        vec![FileAttachment::new("/nonexistent/source.pdf".into(), "application/pdf")],
    );

    let result = client_for(&server)
        .send_message(&SessionId::new(), &message)
        .await;

    assert!(matches!(result, Err(LlmClientError::AttachmentUnreadable(_))));
}

#[tokio::test]
async fn given_rate_limited_api_when_sending_then_returns_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send_message(&SessionId::new(), &OutboundMessage::text_only("Hi"))
        .await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_sending_then_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send_message(&SessionId::new(), &OutboundMessage::text_only("Hi"))
        .await;

    match result {
        Err(LlmClientError::ApiRequestFailed(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("backend exploded"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn given_empty_candidates_when_sending_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .send_message(&SessionId::new(), &OutboundMessage::text_only("Hi"))
        .await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[test]
fn given_blank_api_key_when_creating_client_then_returns_missing_credential() {
    let settings = LlmSettings {
        api_key: "  ".to_string(),
        base_url: GEMINI_BASE_URL.to_string(),
        model: MODEL.to_string(),
        timeout_seconds: None,
    };

    let result = create_chat_client(&settings, reqwest::Client::new(), "prompt");

    assert!(matches!(result, Err(LlmClientError::MissingCredential)));
}
