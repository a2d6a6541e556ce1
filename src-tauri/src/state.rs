//! Application state management
use parking_lot::RwLock;
use seltzer_core::{Config, Editor, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    editor: Arc<RwLock<Editor>>,
    welcome_shown: AtomicBool,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = Config::default();
        let editor = Editor::new(config);

        Ok(Self {
            editor: Arc::new(RwLock::new(editor)),
            welcome_shown: AtomicBool::new(false),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        self.editor.write().initialize()
    }

    pub fn with_editor<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Editor) -> T,
    {
        f(&self.editor.read())
    }

    pub fn with_editor_mut<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Editor) -> T,
    {
        f(&mut self.editor.write())
    }

    pub fn config(&self) -> Config {
        self.editor.read().config().clone()
    }

    /// True exactly once, the first time it is asked
    pub fn take_welcome(&self) -> bool {
        !self.welcome_shown.swap(true, Ordering::SeqCst)
    }
}
