use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Token storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write token to storage: {0}")]
    Write(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
