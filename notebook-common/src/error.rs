/// Errors from reading or validating a notebook's file list
#[derive(Debug, thiserror::Error)]
pub enum FileListError {
    #[error("invalid file list payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("duplicate filename in file list: {0}")]
    DuplicateFilename(String),
}
