mod gemini_chat_client;
pub(crate) mod gemini_types;

pub use gemini_chat_client::{GeminiChatClient, SESSION_ID_HEADER, create_chat_client};
