use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Request body cap for `/api/chat`, sized for base64-encoded documents.
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

const BASE_SETTINGS_FILE: &str = "config/appsettings.base";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub llm: LlmSettings,
    pub speech: SpeechSettings,
    pub cors: CorsSettings,
    pub chat: ChatSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Postgres connection string; status checks stay in memory when unset.
    #[serde(default)]
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub voice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// `*` allows any origin, without credentials.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    pub locale: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub temp_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, `config/appsettings.base.toml`,
    /// `config/appsettings.{env}.toml`, `APP_*` variables (`__` separated) and
    /// the conventional variables `DATABASE_URL`, `LLM_API_KEY`
    /// (or `EMERGENT_LLM_KEY`), `GOOGLE_API_KEY`, `CORS_ORIGINS` and `SERVER_PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8001)?
            .set_default("server.max_body_bytes", DEFAULT_MAX_BODY_BYTES as u64)?
            .set_default("database.max_connections", 10)?
            .set_default("llm.api_key", "")?
            .set_default("llm.base_url", GEMINI_BASE_URL)?
            .set_default("llm.model", "gemini-2.5-flash")?
            .set_default("speech.api_key", "")?
            .set_default("speech.base_url", GEMINI_BASE_URL)?
            .set_default("speech.model", "gemini-2.5-flash-preview-tts")?
            .set_default("speech.voice", "Kore")?
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("chat.locale", "ar")?
            .set_default("logging.level", "info,alhootah=debug,tower_http=debug")?
            .set_default("logging.json", false)?
            .add_source(File::with_name(BASE_SETTINGS_FILE).required(false))
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("database.url", non_empty_var("DATABASE_URL"))?
            .set_override_option(
                "llm.api_key",
                non_empty_var("LLM_API_KEY").or_else(|| non_empty_var("EMERGENT_LLM_KEY")),
            )?
            .set_override_option("speech.api_key", non_empty_var("GOOGLE_API_KEY"))?
            .set_override_option(
                "cors.allowed_origins",
                non_empty_var("CORS_ORIGINS").map(|v| split_origins(&v)),
            )?
            .set_override_option("server.port", non_empty_var("SERVER_PORT"))?
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
