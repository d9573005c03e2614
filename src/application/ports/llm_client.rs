use async_trait::async_trait;

use crate::domain::{OutboundMessage, SessionId};

/// Remote chat-completion model configured with a fixed persona and model.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send_message(
        &self,
        session_id: &SessionId,
        message: &OutboundMessage,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("missing api credential")]
    MissingCredential,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("attachment unreadable: {0}")]
    AttachmentUnreadable(String),
}
