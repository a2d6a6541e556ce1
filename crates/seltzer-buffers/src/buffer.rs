//! Buffer data structure
//!
//! A buffer is a named, in-memory text document. The name doubles as the
//! display label on the tab bar and as the store key, so renaming a buffer
//! is a store-level operation, not a field mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BufferError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buffer {
    /// Display name, unique across the store
    pub name: String,
    /// Full text content
    pub content: String,
    /// When the buffer was created
    pub created_at: DateTime<Utc>,
    /// Last content or name change
    pub updated_at: DateTime<Utc>,
}

impl Buffer {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(BufferError::InvalidName("name cannot be empty".to_string()));
        }

        let now = Utc::now();

        Ok(Self {
            name,
            content: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrite the stored content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer() {
        let buffer = Buffer::new("Untitled-1".to_string()).unwrap();
        assert_eq!(buffer.name, "Untitled-1");
        assert!(buffer.content.is_empty());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_set_content() {
        let mut buffer = Buffer::new("Untitled-1".to_string()).unwrap();
        buffer.set_content("hello".to_string());
        assert_eq!(buffer.content, "hello");
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(Buffer::new(String::new()).is_err());
    }
}
