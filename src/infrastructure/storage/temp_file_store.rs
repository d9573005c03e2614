use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{AttachmentStore, AttachmentStoreError, MaterializedFile};

const FILE_PREFIX: &str = "source-";

/// Materializes payloads as uniquely named files in a scratch directory
/// (the system temp dir unless one is configured).
pub struct TempFileAttachmentStore {
    dir: Option<PathBuf>,
}

impl TempFileAttachmentStore {
    pub fn new(dir: Option<PathBuf>) -> Result<Self, AttachmentStoreError> {
        if let Some(dir) = &dir {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self { dir })
    }
}

#[async_trait]
impl AttachmentStore for TempFileAttachmentStore {
    async fn materialize(
        &self,
        bytes: Vec<u8>,
        suffix: &str,
    ) -> Result<MaterializedFile, AttachmentStoreError> {
        let dir = self.dir.clone();
        let suffix = suffix.to_string();

        tokio::task::spawn_blocking(move || -> Result<MaterializedFile, AttachmentStoreError> {
            let mut builder = tempfile::Builder::new();
            builder.prefix(FILE_PREFIX).suffix(&suffix);
            let mut file = match &dir {
                Some(dir) => builder.tempfile_in(dir)?,
                None => builder.tempfile()?,
            };
            file.write_all(&bytes)?;
            file.flush()?;
            Ok(MaterializedFile::new(file.into_temp_path()))
        })
        .await
        .map_err(|e| AttachmentStoreError::CreateFailed(e.to_string()))?
    }
}
