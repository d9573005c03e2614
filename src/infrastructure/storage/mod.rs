mod temp_file_store;

pub use temp_file_store::TempFileAttachmentStore;
