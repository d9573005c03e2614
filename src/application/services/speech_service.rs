use std::sync::Arc;

use crate::application::PromptCatalog;
use crate::application::ports::{SpeechError, SpeechSynthesizer};

pub struct SpeechService {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
}

impl SpeechService {
    /// `synthesizer` is `None` when no credential was configured at startup.
    pub fn new(synthesizer: Option<Arc<dyn SpeechSynthesizer>>) -> Self {
        Self { synthesizer }
    }

    /// Returns base64 audio. No retries: a rate-limited call fails straight away.
    #[tracing::instrument(skip(self, text), fields(text_length = text.chars().count()))]
    pub async fn synthesize(&self, text: &str) -> Result<String, SpeechError> {
        let Some(synthesizer) = &self.synthesizer else {
            tracing::error!("Speech synthesizer not configured: missing api key");
            return Err(SpeechError::MissingCredential);
        };

        match synthesizer.synthesize(text).await {
            Ok(audio) => {
                tracing::info!(audio_length = audio.len(), "Speech generated");
                Ok(audio)
            }
            Err(e) => {
                tracing::error!(error = %e, "Speech synthesis failed");
                Err(e)
            }
        }
    }
}

/// Localized message shown to the user for a failed synthesis.
pub fn speech_error_message(error: &SpeechError, catalog: &PromptCatalog) -> &'static str {
    match error {
        SpeechError::MissingCredential => catalog.speech_not_configured,
        SpeechError::RateLimited => catalog.speech_busy,
        SpeechError::ApiError { .. } => catalog.speech_vendor_error,
        SpeechError::MissingAudio => catalog.speech_no_audio,
        SpeechError::ApiRequestFailed(_) => catalog.speech_failed,
    }
}
