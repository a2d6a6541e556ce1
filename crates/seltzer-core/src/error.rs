//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] seltzer_buffers::BufferError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing startup asset: {0}")]
    MissingAsset(String),

    #[error("No active buffer")]
    NoActiveBuffer,
}
