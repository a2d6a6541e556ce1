//! Buffer error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BufferError {
    #[error("Buffer not found: {0}")]
    NotFound(String),

    #[error("Buffer name already taken: {0}")]
    NameTaken(String),

    #[error("Invalid buffer name: {0}")]
    InvalidName(String),
}
