use std::sync::Arc;

use axum::Router;
use axum::response::Response;
use tempfile::TempDir;

use alhootah::application::Locale;
use alhootah::application::ports::{ChatClient, SpeechSynthesizer};
use alhootah::application::services::{ChatService, SourceAggregator, SpeechService};
use alhootah::infrastructure::persistence::InMemoryStatusCheckRepository;
use alhootah::infrastructure::storage::TempFileAttachmentStore;
use alhootah::presentation::config::{CorsSettings, DEFAULT_MAX_BODY_BYTES};
use alhootah::presentation::{AppState, create_router};

use super::{RecordingChatClient, StubSpeechSynthesizer};

pub struct TestApp {
    pub router: Router,
    pub chat_client: Option<Arc<RecordingChatClient>>,
    pub scratch: TempDir,
}

impl TestApp {
    pub fn new(
        chat_client: Option<RecordingChatClient>,
        speech: Option<StubSpeechSynthesizer>,
        locale: Locale,
    ) -> Self {
        let scratch = TempDir::new().unwrap();
        let attachment_store =
            Arc::new(TempFileAttachmentStore::new(Some(scratch.path().to_path_buf())).unwrap());
        let catalog = locale.catalog();

        let chat_client = chat_client.map(Arc::new);
        let dyn_chat_client = chat_client
            .clone()
            .map(|client| client as Arc<dyn ChatClient>);
        let speech = speech.map(|s| Arc::new(s) as Arc<dyn SpeechSynthesizer>);

        let state = AppState {
            chat_service: Arc::new(ChatService::new(
                dyn_chat_client,
                SourceAggregator::new(attachment_store, catalog),
            )),
            speech_service: Arc::new(SpeechService::new(speech)),
            status_repository: Arc::new(InMemoryStatusCheckRepository::new()),
            catalog,
        };

        let cors = CorsSettings {
            allowed_origins: vec!["*".to_string()],
        };

        Self {
            router: create_router(state, &cors, DEFAULT_MAX_BODY_BYTES),
            chat_client,
            scratch,
        }
    }

    pub fn replying() -> Self {
        Self::new(
            Some(RecordingChatClient::replying()),
            Some(StubSpeechSynthesizer::Audio("UklGRg==")),
            Locale::English,
        )
    }

    pub fn chat_client(&self) -> &RecordingChatClient {
        self.chat_client.as_deref().expect("app built without a chat client")
    }

    pub fn scratch_is_empty(&self) -> bool {
        std::fs::read_dir(self.scratch.path()).unwrap().next().is_none()
    }
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
