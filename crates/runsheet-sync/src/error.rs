use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("backend rejected request: {0}")]
    Backend(String),

    #[error("item index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SyncError>;
