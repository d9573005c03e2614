use serde::{Deserialize, Serialize};

use crate::domain::{Source, StatusCheck};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
    pub sources: Vec<SourcePayload>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcePayload {
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_data: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl From<SourcePayload> for Source {
    fn from(payload: SourcePayload) -> Self {
        Self {
            name: payload.name,
            content: payload.content,
            file_data: payload.file_data,
            mime_type: payload.mime_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsRequest {
    pub text: String,
}

/// Exactly one of `audio` and `error` is set; the other serializes as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsResponse {
    pub audio: Option<String>,
    pub error: Option<String>,
}

impl TtsResponse {
    pub fn audio(audio: String) -> Self {
        Self {
            audio: Some(audio),
            error: None,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            audio: None,
            error: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id.as_uuid().to_string(),
            client_name: check.client_name,
            timestamp: check.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusListQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub skip: u64,
}

fn default_limit() -> u64 {
    100
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
