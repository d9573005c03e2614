mod gemini_speech_client;

pub use gemini_speech_client::{GeminiSpeechClient, create_speech_client};
