use std::path::PathBuf;

const FALLBACK_SUFFIX: &str = ".bin";

/// A materialized file handed to the chat client alongside the prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttachment {
    pub path: PathBuf,
    pub mime_type: String,
}

impl FileAttachment {
    pub fn new(path: PathBuf, mime_type: impl Into<String>) -> Self {
        Self {
            path,
            mime_type: mime_type.into(),
        }
    }
}

/// File suffix used when writing a payload of the given MIME type to disk.
pub fn suffix_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "application/pdf" => ".pdf",
        "text/plain" => ".txt",
        "text/csv" => ".csv",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => ".xlsx",
        "application/vnd.ms-excel" => ".xls",
        "application/msword" => ".doc",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => ".docx",
        "image/png" => ".png",
        "image/jpeg" => ".jpg",
        _ => FALLBACK_SUFFIX,
    }
}
