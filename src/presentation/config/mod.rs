mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ChatSettings, CorsSettings, DEFAULT_MAX_BODY_BYTES, DatabaseSettings, GEMINI_BASE_URL, LlmSettings, LoggingSettings,
    ServerSettings, Settings, SpeechSettings, StorageSettings, split_origins,
};
