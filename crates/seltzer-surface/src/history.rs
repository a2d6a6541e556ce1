//! Linear edit history
//!
//! A bounded pair of snapshot stacks. Recording a new edit invalidates the
//! redo stack; undo and redo move whole-content snapshots between the two
//! stacks and hand the caller the content to display.

#[derive(Debug)]
pub struct EditHistory {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    /// Maximum number of undoable snapshots kept
    max_depth: usize,
}

impl EditHistory {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Record the content as it was before an edit. Clears the redo stack:
    /// a new edit after an undo forks the timeline and the undone branch
    /// is gone.
    pub fn record(&mut self, previous: String) {
        self.undo_stack.push(previous);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Pop the most recent snapshot, parking `current` on the redo stack.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: String) -> Option<String> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Reapply the most recently undone snapshot, parking `current` on the
    /// undo stack. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: String) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    /// Drop both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = EditHistory::new(10);
        history.record("a".to_string());

        let undone = history.undo("ab".to_string()).unwrap();
        assert_eq!(undone, "a");
        assert!(history.can_redo());

        let redone = history.redo(undone).unwrap();
        assert_eq!(redone, "ab");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = EditHistory::new(10);
        history.record("a".to_string());
        history.undo("ab".to_string()).unwrap();
        assert!(history.can_redo());

        history.record("a".to_string());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_depth_is_bounded() {
        let mut history = EditHistory::new(3);
        for i in 0..5 {
            history.record(format!("edit-{i}"));
        }
        assert_eq!(history.undo_depth(), 3);

        // Oldest snapshots were dropped, newest survive
        assert_eq!(history.undo("now".to_string()).unwrap(), "edit-4");
        assert_eq!(history.undo("edit-4".to_string()).unwrap(), "edit-3");
        assert_eq!(history.undo("edit-3".to_string()).unwrap(), "edit-2");
        assert!(history.undo("edit-2".to_string()).is_none());
    }

    #[test]
    fn test_empty_stacks() {
        let mut history = EditHistory::new(10);
        assert!(history.undo("x".to_string()).is_none());
        assert!(history.redo("x".to_string()).is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
