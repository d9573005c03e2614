use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;

use crate::application::ports::{ChatClient, LlmClientError};
use crate::domain::{OutboundMessage, SessionId};
use crate::presentation::config::LlmSettings;

use super::gemini_types::{Content, GenerateContentRequest, GenerateContentResponse, Part};

pub const SESSION_ID_HEADER: &str = "x-session-id";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    system_prompt: String,
    timeout: Option<Duration>,
}

impl GeminiChatClient {
    pub fn new(
        client: Client,
        base_url: &str,
        api_key: String,
        model: String,
        system_prompt: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            system_prompt,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn build_parts(&self, message: &OutboundMessage) -> Result<Vec<Part>, LlmClientError> {
        let mut parts = vec![Part::text(&message.text)];
        for attachment in &message.attachments {
            let bytes = tokio::fs::read(&attachment.path).await.map_err(|e| {
                LlmClientError::AttachmentUnreadable(format!(
                    "{}: {}",
                    attachment.path.display(),
                    e
                ))
            })?;
            parts.push(Part::inline(&attachment.mime_type, STANDARD.encode(bytes)));
        }
        Ok(parts)
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    #[tracing::instrument(skip(self, session_id, message), fields(model = %self.model, session_id = %session_id))]
    async fn send_message(
        &self,
        session_id: &SessionId,
        message: &OutboundMessage,
    ) -> Result<String, LlmClientError> {
        let request_body = GenerateContentRequest {
            system_instruction: Some(Content::system(&self.system_prompt)),
            contents: vec![Content::user(self.build_parts(message).await?)],
            generation_config: None,
        };

        let mut request = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header(API_KEY_HEADER, &self.api_key)
            .header(SESSION_ID_HEADER, session_id.as_str())
            .json(&request_body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion
            .first_text()
            .ok_or_else(|| LlmClientError::InvalidResponse("empty candidates".to_string()))
    }
}

pub fn create_chat_client(
    settings: &LlmSettings,
    client: Client,
    system_prompt: &str,
) -> Result<GeminiChatClient, LlmClientError> {
    if settings.api_key.trim().is_empty() {
        return Err(LlmClientError::MissingCredential);
    }

    Ok(GeminiChatClient::new(
        client,
        &settings.base_url,
        settings.api_key.clone(),
        settings.model.clone(),
        system_prompt.to_string(),
    )
    .with_timeout(settings.timeout_seconds.map(Duration::from_secs)))
}
