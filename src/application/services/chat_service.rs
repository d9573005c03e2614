use std::sync::Arc;

use crate::application::PromptCatalog;
use crate::application::ports::{ChatClient, LlmClientError};
use crate::domain::{SessionId, Source};
use crate::infrastructure::observability::sanitize_prompt;

use super::SourceAggregator;

/// Forwards a grounded question to the remote chat model. Session continuity
/// belongs to the remote side; nothing is kept here between calls.
pub struct ChatService {
    chat_client: Option<Arc<dyn ChatClient>>,
    aggregator: SourceAggregator,
}

#[derive(Debug, Clone)]
pub struct ChatAnswer {
    pub response: String,
    pub session_id: SessionId,
}

#[derive(Debug)]
pub struct ChatFailure {
    pub session_id: SessionId,
    pub kind: ChatFailureKind,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatFailureKind {
    #[error("chat client not configured")]
    NotConfigured,
    #[error("completion: {0}")]
    Remote(#[from] LlmClientError),
}

impl ChatFailure {
    pub fn user_message(&self, catalog: &PromptCatalog) -> &'static str {
        match self.kind {
            ChatFailureKind::NotConfigured
            | ChatFailureKind::Remote(LlmClientError::MissingCredential) => {
                catalog.chat_not_configured
            }
            ChatFailureKind::Remote(_) => catalog.chat_failed,
        }
    }
}

impl ChatService {
    /// `chat_client` is `None` when no credential was configured at startup.
    pub fn new(chat_client: Option<Arc<dyn ChatClient>>, aggregator: SourceAggregator) -> Self {
        Self {
            chat_client,
            aggregator,
        }
    }

    #[tracing::instrument(
        skip(self, question, sources, session_id),
        fields(sources = sources.len(), session_id = tracing::field::Empty)
    )]
    pub async fn dispatch(
        &self,
        question: &str,
        sources: &[Source],
        session_id: Option<String>,
    ) -> Result<ChatAnswer, ChatFailure> {
        let session_id = SessionId::resolve(session_id);
        tracing::Span::current().record("session_id", session_id.as_str());

        let Some(chat_client) = &self.chat_client else {
            tracing::error!("Chat client not configured: missing LLM api key");
            return Err(ChatFailure {
                session_id,
                kind: ChatFailureKind::NotConfigured,
            });
        };

        tracing::debug!(question = %sanitize_prompt(question), "Aggregating sources");
        let prompt = self.aggregator.aggregate(question, sources).await;

        tracing::info!(
            files = prompt.file_count(),
            text_length = prompt.message.text.chars().count(),
            "Sending message to chat model"
        );
        let result = chat_client.send_message(&session_id, &prompt.message).await;
        prompt.release();

        match result {
            Ok(response) => {
                tracing::info!(response = %sanitize_prompt(&response), "Received chat response");
                Ok(ChatAnswer {
                    response,
                    session_id,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Chat completion failed");
                Err(ChatFailure {
                    session_id,
                    kind: e.into(),
                })
            }
        }
    }
}
