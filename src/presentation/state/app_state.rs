use std::sync::Arc;

use crate::application::PromptCatalog;
use crate::application::ports::StatusCheckRepository;
use crate::application::services::{ChatService, SpeechService};

/// Long-lived dependencies shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub speech_service: Arc<SpeechService>,
    pub status_repository: Arc<dyn StatusCheckRepository>,
    pub catalog: &'static PromptCatalog,
}
