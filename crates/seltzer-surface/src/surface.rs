//! Editing surface
//!
//! Holds the content currently shown in the text widget. Edits arrive as
//! discrete commits (the view batches keystrokes), never per key press.
//! The version counter is bumped whenever content changes underneath the
//! view (undo, redo, load), so the widget knows to re-read instead of
//! clobbering what the user is typing.

use crate::history::EditHistory;
use crate::DEFAULT_HISTORY_DEPTH;

#[derive(Debug)]
pub struct Surface {
    content: String,
    history: EditHistory,
    version: u64,
}

impl Surface {
    pub fn new(history_depth: usize) -> Self {
        Self {
            content: String::new(),
            history: EditHistory::new(history_depth),
            version: 0,
        }
    }

    /// Record a discrete edit coming from the view. Committing unchanged
    /// content is a no-op and does not touch the history.
    pub fn commit(&mut self, new_content: String) {
        if new_content == self.content {
            return;
        }
        let previous = std::mem::replace(&mut self.content, new_content);
        self.history.record(previous);
    }

    /// Replace the content wholesale, e.g. on buffer switch or file open.
    /// Resets the history so undo cannot resurrect another buffer's text
    /// through the shared surface.
    pub fn load(&mut self, content: String) {
        self.content = content;
        self.history.clear();
        self.version = self.version.wrapping_add(1);
    }

    /// Undo the last committed edit. Returns `true` if anything changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.content.clone()) {
            Some(previous) => {
                self.content = previous;
                self.version = self.version.wrapping_add(1);
                tracing::debug!(depth = self.history.undo_depth(), "Undo applied");
                true
            }
            None => false,
        }
    }

    /// Redo the last undone edit. Returns `true` if anything changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.content.clone()) {
            Some(next) => {
                self.content = next;
                self.version = self.version.wrapping_add(1);
                tracing::debug!(depth = self.history.redo_depth(), "Redo applied");
                true
            }
            None => false,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_and_undo() {
        let mut surface = Surface::default();
        surface.commit("hello".to_string());
        surface.commit("hello world".to_string());

        assert!(surface.undo());
        assert_eq!(surface.content(), "hello");
        assert!(surface.undo());
        assert_eq!(surface.content(), "");
        assert!(!surface.undo());
    }

    #[test]
    fn test_redo_restores_undone_edit() {
        let mut surface = Surface::default();
        surface.commit("draft".to_string());
        surface.undo();

        assert!(surface.redo());
        assert_eq!(surface.content(), "draft");
        assert!(!surface.redo());
    }

    #[test]
    fn test_new_edit_after_undo_clears_redo() {
        let mut surface = Surface::default();
        surface.commit("one".to_string());
        surface.commit("two".to_string());
        surface.undo();

        surface.commit("three".to_string());
        assert!(!surface.can_redo());
        assert!(surface.undo());
        assert_eq!(surface.content(), "one");
    }

    #[test]
    fn test_commit_unchanged_is_noop() {
        let mut surface = Surface::default();
        surface.commit("same".to_string());
        surface.commit("same".to_string());

        assert!(surface.undo());
        assert_eq!(surface.content(), "");
        assert!(!surface.can_undo());
    }

    #[test]
    fn test_load_resets_history_and_bumps_version() {
        let mut surface = Surface::default();
        surface.commit("edited".to_string());
        let version = surface.version();

        surface.load("from file".to_string());
        assert_eq!(surface.content(), "from file");
        assert!(surface.version() > version);
        assert!(!surface.can_undo());
        assert!(!surface.can_redo());
    }

    #[test]
    fn test_version_moves_on_undo_redo() {
        let mut surface = Surface::default();
        surface.commit("x".to_string());
        let before = surface.version();

        surface.undo();
        let after_undo = surface.version();
        assert_ne!(before, after_undo);

        surface.redo();
        assert_ne!(after_undo, surface.version());
    }
}
