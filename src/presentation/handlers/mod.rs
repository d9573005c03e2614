pub mod api_types;
mod chat;
mod health;
mod status;
mod tts;

pub use chat::chat_handler;
pub use health::{health_handler, root_handler};
pub use status::{create_status_handler, list_status_handler};
pub use tts::tts_handler;
