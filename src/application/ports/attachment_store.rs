use std::io;
use std::path::Path;

use async_trait::async_trait;
use tempfile::TempPath;

/// Writes decoded source payloads to local files the chat client can read.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn materialize(
        &self,
        bytes: Vec<u8>,
        suffix: &str,
    ) -> Result<MaterializedFile, AttachmentStoreError>;
}

/// A request-scoped file on local disk. The file is removed when the handle
/// is released or dropped, whichever comes first.
#[derive(Debug)]
pub struct MaterializedFile {
    path: TempPath,
}

impl MaterializedFile {
    pub fn new(path: TempPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn release(self) -> io::Result<()> {
        self.path.close()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AttachmentStoreError {
    #[error("failed to create file: {0}")]
    CreateFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
