mod attachment;
mod outbound_message;
mod session_id;
mod source;
mod status_check;

pub use attachment::{FileAttachment, suffix_for_mime};
pub use outbound_message::OutboundMessage;
pub use session_id::SessionId;
pub use source::{Source, SourceKind};
pub use status_check::{StatusCheck, StatusCheckId};
