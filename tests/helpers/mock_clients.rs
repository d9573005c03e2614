use std::path::PathBuf;
use std::sync::Mutex;

use alhootah::application::ports::{ChatClient, LlmClientError, SpeechError, SpeechSynthesizer};
use alhootah::domain::{OutboundMessage, SessionId};

/// A chat call as observed while the attachments were still on disk.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub session_id: String,
    pub text: String,
    pub attachments: Vec<(PathBuf, String, Vec<u8>)>,
}

pub struct RecordingChatClient {
    fail: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingChatClient {
    pub fn replying() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls().pop().expect("chat client was never called")
    }
}

#[async_trait::async_trait]
impl ChatClient for RecordingChatClient {
    async fn send_message(
        &self,
        session_id: &SessionId,
        message: &OutboundMessage,
    ) -> Result<String, LlmClientError> {
        let attachments = message
            .attachments
            .iter()
            .map(|a| {
                let bytes = std::fs::read(&a.path).unwrap_or_default();
                (a.path.clone(), a.mime_type.clone(), bytes)
            })
            .collect();

        self.calls.lock().unwrap().push(RecordedCall {
            session_id: session_id.to_string(),
            text: message.text.clone(),
            attachments,
        });

        if self.fail {
            Err(LlmClientError::ApiRequestFailed("HTTP 503: unavailable".to_string()))
        } else {
            Ok("Mock answer".to_string())
        }
    }
}

pub enum StubSpeechSynthesizer {
    Audio(&'static str),
    RateLimited,
    VendorError,
    NoAudio,
}

#[async_trait::async_trait]
impl SpeechSynthesizer for StubSpeechSynthesizer {
    async fn synthesize(&self, _text: &str) -> Result<String, SpeechError> {
        match self {
            Self::Audio(audio) => Ok((*audio).to_string()),
            Self::RateLimited => Err(SpeechError::RateLimited),
            Self::VendorError => Err(SpeechError::ApiError {
                status: 400,
                body: "bad request".to_string(),
            }),
            Self::NoAudio => Err(SpeechError::MissingAudio),
        }
    }
}
