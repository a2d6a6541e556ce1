//! Buffer store
//!
//! Owns every open buffer, keyed by name, plus the display order for the
//! tab bar. Auto-generated names come from a monotonic creation counter
//! that skips names already in use, so they are unique by construction and
//! never reused once a rename takes one out of circulation.

use std::collections::HashMap;

use crate::buffer::Buffer;
use crate::error::BufferError;
use crate::Result;

/// Prefix for auto-generated buffer names
const UNTITLED_PREFIX: &str = "Untitled";

#[derive(Debug, Default)]
pub struct BufferStore {
    /// All open buffers by name
    buffers: HashMap<String, Buffer>,
    /// Names in display (insertion) order
    order: Vec<String>,
    /// Monotonic creation counter, never decremented
    created: u64,
}

impl BufferStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty buffer under a generated `Untitled-N` name and
    /// return the name.
    pub fn create(&mut self) -> Result<String> {
        let name = loop {
            self.created += 1;
            let candidate = format!("{}-{}", UNTITLED_PREFIX, self.created);
            if !self.buffers.contains_key(&candidate) {
                break candidate;
            }
        };

        let buffer = Buffer::new(name.clone())?;
        self.buffers.insert(name.clone(), buffer);
        self.order.push(name.clone());

        tracing::info!(buffer = %name, "Created new buffer");

        Ok(name)
    }

    /// Get a buffer by name
    pub fn get(&self, name: &str) -> Result<&Buffer> {
        self.buffers
            .get(name)
            .ok_or_else(|| BufferError::NotFound(name.to_string()))
    }

    /// Overwrite the stored content of an existing buffer
    pub fn set_content(&mut self, name: &str, content: String) -> Result<()> {
        let buffer = self
            .buffers
            .get_mut(name)
            .ok_or_else(|| BufferError::NotFound(name.to_string()))?;
        buffer.set_content(content);
        Ok(())
    }

    /// Move a buffer to a new name, keeping its content, creation time and
    /// position on the tab bar. Renaming a buffer to its own name is a
    /// no-op; renaming onto another live buffer is refused.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        if old == new {
            return Ok(());
        }
        if new.is_empty() {
            return Err(BufferError::InvalidName("name cannot be empty".to_string()));
        }
        if self.buffers.contains_key(new) {
            return Err(BufferError::NameTaken(new.to_string()));
        }

        let mut buffer = self
            .buffers
            .remove(old)
            .ok_or_else(|| BufferError::NotFound(old.to_string()))?;
        buffer.name = new.to_string();
        buffer.updated_at = chrono::Utc::now();
        self.buffers.insert(new.to_string(), buffer);

        if let Some(slot) = self.order.iter_mut().find(|n| *n == old) {
            *slot = new.to_string();
        }

        tracing::info!(from = %old, to = %new, "Renamed buffer");

        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.buffers.contains_key(name)
    }

    /// Buffer names in display order
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_generates_distinct_names() {
        let mut store = BufferStore::new();
        let names: Vec<String> = (0..5).map(|_| store.create().unwrap()).collect();

        assert_eq!(
            names,
            vec![
                "Untitled-1",
                "Untitled-2",
                "Untitled-3",
                "Untitled-4",
                "Untitled-5"
            ]
        );
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_get_and_set_content() {
        let mut store = BufferStore::new();
        let name = store.create().unwrap();

        assert_eq!(store.get(&name).unwrap().content, "");

        store.set_content(&name, "hello world".to_string()).unwrap();
        assert_eq!(store.get(&name).unwrap().content, "hello world");

        assert!(store.get("nope").is_err());
        assert!(store.set_content("nope", String::new()).is_err());
    }

    #[test]
    fn test_rename_moves_content_and_order() {
        let mut store = BufferStore::new();
        let a = store.create().unwrap();
        let b = store.create().unwrap();
        store.set_content(&a, "first".to_string()).unwrap();

        store.rename(&a, "notes").unwrap();

        assert!(!store.contains(&a));
        assert_eq!(store.get("notes").unwrap().content, "first");
        // Display order position is preserved
        assert_eq!(store.names(), vec!["notes", b.as_str()]);
    }

    #[test]
    fn test_rename_refuses_taken_name() {
        let mut store = BufferStore::new();
        let a = store.create().unwrap();
        let b = store.create().unwrap();

        assert!(matches!(
            store.rename(&a, &b),
            Err(BufferError::NameTaken(_))
        ));
        // Self-rename is a no-op
        store.rename(&a, &a).unwrap();
        assert!(store.contains(&a));
    }

    #[test]
    fn test_generated_names_skip_taken_slots() {
        let mut store = BufferStore::new();
        let a = store.create().unwrap();
        assert_eq!(a, "Untitled-1");

        // A save-rename frees "Untitled-1" but the counter never reuses it
        store.rename(&a, "notes").unwrap();
        assert_eq!(store.create().unwrap(), "Untitled-2");

        // A rename can also occupy a future generated name
        store.rename("notes", "Untitled-3").unwrap();
        assert_eq!(store.create().unwrap(), "Untitled-4");
    }
}
