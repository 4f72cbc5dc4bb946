use std::io;
use thiserror::Error;

/// Errors from persisting filter criteria
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("State storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("State serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
