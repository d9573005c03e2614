use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{SpeechError, SpeechSynthesizer};
use crate::infrastructure::llm::gemini_types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};
use crate::presentation::config::SpeechSettings;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiSpeechClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    voice: String,
}

impl GeminiSpeechClient {
    pub fn new(client: Client, base_url: &str, api_key: String, model: String, voice: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            voice,
        }
    }

    fn build_request(&self, text: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user(vec![Part::text(text)])],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["AUDIO".to_string()],
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: self.voice.clone(),
                        },
                    },
                }),
            }),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GeminiSpeechClient {
    #[tracing::instrument(skip(self, text), fields(model = %self.model, voice = %self.voice))]
    async fn synthesize(&self, text: &str) -> Result<String, SpeechError> {
        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.build_request(text))
            .send()
            .await
            .map_err(|e| SpeechError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "TTS API error");
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(SpeechError::RateLimited);
            }
            return Err(SpeechError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::ApiRequestFailed(e.to_string()))?;

        match result.first_inline_data() {
            Some(audio) => Ok(audio.to_string()),
            None => {
                tracing::error!(candidates = result.candidates.len(), "No audio data in TTS response");
                Err(SpeechError::MissingAudio)
            }
        }
    }
}

pub fn create_speech_client(
    settings: &SpeechSettings,
    client: Client,
) -> Result<GeminiSpeechClient, SpeechError> {
    if settings.api_key.trim().is_empty() {
        return Err(SpeechError::MissingCredential);
    }

    Ok(GeminiSpeechClient::new(
        client,
        &settings.base_url,
        settings.api_key.clone(),
        settings.model.clone(),
        settings.voice.clone(),
    ))
}
