use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    ConfigError(#[from] learnhub::client::error::ConfigError),
    #[error(transparent)]
    StorageError(#[from] learnhub::client::error::StorageError),
}
