mod chat_service;
mod source_aggregator;
mod speech_service;

pub use chat_service::{ChatAnswer, ChatFailure, ChatFailureKind, ChatService};
pub use source_aggregator::{AggregatedPrompt, SourceAggregator, SourceError, decode_payload};
pub use speech_service::{SpeechService, speech_error_message};
