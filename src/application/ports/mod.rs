mod attachment_store;
mod llm_client;
mod repository_error;
mod speech_synthesizer;
mod status_check_repository;

pub use attachment_store::{AttachmentStore, AttachmentStoreError, MaterializedFile};
pub use llm_client::{ChatClient, LlmClientError};
pub use repository_error::RepositoryError;
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer};
pub use status_check_repository::StatusCheckRepository;
