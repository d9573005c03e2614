use std::sync::Arc;

use alhootah::application::Locale;
use alhootah::application::ports::{SpeechError, SpeechSynthesizer};
use alhootah::application::services::{SpeechService, speech_error_message};

use crate::helpers::StubSpeechSynthesizer;

fn service(stub: StubSpeechSynthesizer) -> SpeechService {
    SpeechService::new(Some(Arc::new(stub) as Arc<dyn SpeechSynthesizer>))
}

#[tokio::test]
async fn given_configured_synthesizer_when_synthesizing_then_returns_audio() {
    let audio = service(StubSpeechSynthesizer::Audio("UklGRg=="))
        .synthesize("hello")
        .await
        .unwrap();

    assert_eq!(audio, "UklGRg==");
}

#[tokio::test]
async fn given_no_synthesizer_when_synthesizing_then_fails_missing_credential() {
    let error = SpeechService::new(None).synthesize("hello").await.unwrap_err();

    assert!(matches!(error, SpeechError::MissingCredential));
}

#[tokio::test]
async fn given_missing_audio_when_synthesizing_then_maps_to_no_audio_message() {
    let error = service(StubSpeechSynthesizer::NoAudio)
        .synthesize("hello")
        .await
        .unwrap_err();

    assert_eq!(
        speech_error_message(&error, Locale::English.catalog()),
        "No audio was generated"
    );
}

#[test]
fn given_each_error_when_mapping_message_then_rate_limit_is_distinguished() {
    let catalog = Locale::Arabic.catalog();

    assert_eq!(
        speech_error_message(&SpeechError::RateLimited, catalog),
        "خدمة الصوت مشغولة حالياً"
    );
    assert_eq!(
        speech_error_message(
            &SpeechError::ApiError {
                status: 500,
                body: String::new()
            },
            catalog
        ),
        "حدث خطأ في توليد الصوت"
    );
    assert_eq!(
        speech_error_message(&SpeechError::ApiRequestFailed("timeout".to_string()), catalog),
        "حدث خطأ في خدمة الصوت"
    );
}
