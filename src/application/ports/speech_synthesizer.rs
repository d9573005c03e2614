use async_trait::async_trait;

/// Remote text-to-speech engine with a fixed voice.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Returns the synthesized audio as base64 text, as delivered by the vendor.
    async fn synthesize(&self, text: &str) -> Result<String, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("missing api credential")]
    MissingCredential,
    #[error("rate limited")]
    RateLimited,
    #[error("api returned HTTP {status}: {body}")]
    ApiError { status: u16, body: String },
    #[error("response carried no audio")]
    MissingAudio,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
