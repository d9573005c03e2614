use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::application::PromptCatalog;
use crate::application::ports::{AttachmentStore, AttachmentStoreError, MaterializedFile};
use crate::domain::{FileAttachment, OutboundMessage, Source, SourceKind, suffix_for_mime};

/// Merges an ordered list of sources and a question into one outbound message.
pub struct SourceAggregator {
    attachment_store: Arc<dyn AttachmentStore>,
    catalog: &'static PromptCatalog,
}

/// The composed message plus the files backing its attachments. The files
/// must outlive the remote call and are removed by [`AggregatedPrompt::release`]
/// or, failing that, when the value is dropped.
#[derive(Debug)]
pub struct AggregatedPrompt {
    pub message: OutboundMessage,
    files: Vec<MaterializedFile>,
}

impl AggregatedPrompt {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn release(self) {
        for file in self.files {
            let path = file.path().to_path_buf();
            if let Err(e) = file.release() {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove materialized attachment");
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("materialization failed: {0}")]
    Store(#[from] AttachmentStoreError),
}

impl SourceAggregator {
    pub fn new(attachment_store: Arc<dyn AttachmentStore>, catalog: &'static PromptCatalog) -> Self {
        Self {
            attachment_store,
            catalog,
        }
    }

    /// Never fails: a source that cannot be decoded or written is logged and
    /// dropped, and with nothing usable left the message is the bare question.
    #[tracing::instrument(skip_all, fields(sources = sources.len()))]
    pub async fn aggregate(&self, question: &str, sources: &[Source]) -> AggregatedPrompt {
        let mut text_blocks = Vec::new();
        let mut attachments = Vec::new();
        let mut files = Vec::new();

        for source in sources {
            match source.kind() {
                Some(SourceKind::File { data, mime_type }) => {
                    match self.materialize(data, mime_type).await {
                        Ok(file) => {
                            tracing::info!(source = %source.name, mime_type, "Added file source");
                            attachments.push(FileAttachment::new(file.path().to_path_buf(), mime_type));
                            files.push(file);
                        }
                        Err(e) => {
                            tracing::error!(source = %source.name, error = %e, "Dropping file source");
                        }
                    }
                }
                Some(SourceKind::Text { content }) => {
                    text_blocks.push(self.catalog.render_source(&source.name, content));
                }
                None => {
                    tracing::debug!(source = %source.name, "Skipping source without content");
                }
            }
        }

        let text = self.compose(question, &text_blocks, !attachments.is_empty());
        let message = if attachments.is_empty() {
            OutboundMessage::text_only(text)
        } else {
            OutboundMessage::with_attachments(text, attachments)
        };

        AggregatedPrompt { message, files }
    }

    async fn materialize(&self, data: &str, mime_type: &str) -> Result<MaterializedFile, SourceError> {
        let bytes = decode_payload(data)?;
        let file = self
            .attachment_store
            .materialize(bytes, suffix_for_mime(mime_type))
            .await?;
        Ok(file)
    }

    fn compose(&self, question: &str, text_blocks: &[String], has_attachments: bool) -> String {
        if !text_blocks.is_empty() {
            format!(
                "{}\n\n---\n\n{}\n\n{}",
                text_blocks.join("\n\n"),
                self.catalog.question_line(question),
                self.catalog.answer_from_sources
            )
        } else if has_attachments {
            format!(
                "{}\n\n{} '{}'",
                self.catalog.question_line(question),
                self.catalog.answer_from_documents,
                self.catalog.out_of_scope
            )
        } else {
            question.to_string()
        }
    }
}

/// Decodes standard base64, tolerating a `data:` URL header and line breaks.
pub fn decode_payload(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let payload = match data.split_once(";base64,") {
        Some((header, rest)) if header.starts_with("data:") => rest,
        _ => data,
    };
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact)
}
